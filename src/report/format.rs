/// Format an integer count with thousands separators
pub fn format_count(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
