//! Display helpers shared between the frontend components.

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters with an ellipsis in between.
///
/// Addresses shorter than the combined window are returned as-is. Hex
/// addresses are ASCII, so byte slicing is safe here.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6";
/// assert_eq!(format_address(addr, 6, 4), "0xB4FB...08d6");
/// assert_eq!(format_address("0x0000", 6, 4), "0x0000");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// [`format_address`] with the default 6/4 window (keeps the `0x` prefix
/// readable).
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6";
        assert_eq!(format_address(addr, 6, 4), "0xB4FB...08d6");
        assert_eq!(format_address(addr, 2, 2), "0x...d6");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x0000", 6, 4), "0x0000");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";
        assert_eq!(truncate_address(addr), "0x1f98...F984");
    }
}
