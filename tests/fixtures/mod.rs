#[allow(dead_code)]
pub mod install_root;
