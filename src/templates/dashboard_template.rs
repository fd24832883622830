use askama::Template;
use crate::models::DashboardSection;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub portal_title: String,
    pub logo_url: Option<String>,
    pub region: String,
    pub sections: &'a [DashboardSection],
}
