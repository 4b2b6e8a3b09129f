/// School grades a class can be named after.
pub const CLASS_NAMES: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

pub fn is_valid_class_name(name: &str) -> bool {
    CLASS_NAMES.contains(&name)
}
