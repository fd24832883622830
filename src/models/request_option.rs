use serde::Serialize;

/// A WorkSpace bundle a user may ask for on the manage page.
#[derive(Serialize, Clone, Debug)]
pub struct RequestOption {
    pub id: String,
    pub cpu: u32,
    pub ram: String,
    pub os: String,
    pub description: String,
}

impl RequestOption {
    pub fn is_windows(&self) -> bool {
        self.os.eq_ignore_ascii_case("windows")
    }
}
