/// Mask all but the last four characters, e.g. for phone numbers in logs
pub fn mask_tail(value: &str) -> String {
    let len = value.chars().count();
    if len > 4 {
        let tail: String = value.chars().skip(len - 4).collect();
        "*".repeat(len - 4) + &tail
    } else {
        value.to_string()
    }
}
