use askama::Template;
use models::{Record, Report, ReportKind};

pub struct NavLink {
    pub path: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// The one page layout every report is rendered through
#[derive(Template)]
#[template(path = "index.html")]
pub struct ReportPage<'a> {
    pub title: &'a str,
    pub headers: &'a [String],
    pub data: Vec<Record>,
    pub searchable: bool,
    pub search: &'a str,
    pub nav: Vec<NavLink>,
}

impl<'a> ReportPage<'a> {
    pub fn new(kind: ReportKind, report: &'a Report, search: Option<&'a str>) -> Self {
        let nav = ReportKind::all()
            .map(|link| NavLink {
                path: link.path(),
                title: link.title(),
                active: link == kind,
            })
            .collect();

        Self {
            title: kind.title(),
            headers: &report.headers,
            data: report.records(),
            searchable: kind == ReportKind::Hotels,
            search: search.unwrap_or_default(),
            nav,
        }
    }
}
