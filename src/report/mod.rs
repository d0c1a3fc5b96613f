pub mod json;
pub mod text;

pub fn format_f64(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.6}", value)
    }
}
