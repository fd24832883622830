use askama::Template;
use crate::models::RequestOption;

#[derive(Template)]
#[template(path = "manage.html")]
pub struct ManageTemplate<'a> {
    pub portal_title: String,
    pub logo_url: Option<String>,
    pub region: String,
    pub options: &'a [RequestOption],
}
