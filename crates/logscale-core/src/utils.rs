/// Convert PascalCase or camelCase to snake_case.
///
/// # Examples
/// ```
/// use logscale_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("FieldComparison"), "field_comparison");
/// assert_eq!(to_snake_case("groupBy"), "group_by");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
