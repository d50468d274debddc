use tracing::warn;
use crate::renderer::document::chart::{Bar, BarChart, ChartArea, RingChart};
use crate::renderer::document::DocumentConfig;
use crate::renderer::{format_decimal, format_optional_timestamp, format_timestamp};
use crate::report::{ProjectReport, Report, TaskReport, UserReport};

/// Helvetica 평균 글자 폭 (폰트 크기 대비)
const AVG_CHAR_WIDTH: f32 = 0.52;
const DESCENT: f32 = 0.25;

const HEADING_SIZE: f32 = 18.0;
const HEADING_HEIGHT: f32 = 34.0;
const BODY_SIZE: f32 = 10.0;
const STAT_LINE_HEIGHT: f32 = 16.0;
const STAT_BOX_HEIGHT: f32 = 84.0;
const STAT_BOX_GAP: f32 = 16.0;
const CHART_HEIGHT: f32 = 220.0;
const CHART_GAP: f32 = 16.0;
const COVER_HEADER_HEIGHT: f32 = 80.0;
const STAT_VALUE_OFFSET: f32 = 200.0;

/// 나눌 수 없는 블록 중 가장 큰 높이. 한 페이지의 그릴 영역은 이보다 커야 한다.
pub(crate) fn tallest_block_height() -> f32 {
    [CHART_HEIGHT, COVER_HEADER_HEIGHT + STAT_BOX_HEIGHT, HEADING_HEIGHT]
        .into_iter()
        .fold(0.0, f32::max)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.45, 0.45, 0.45);
    pub const LIGHT: Color = Color::rgb(0.93, 0.95, 0.98);
    pub const ACCENT: Color = Color::rgb(0.16, 0.32, 0.62);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// 페이지 위 그리기 요소. 좌표는 pt 단위, 좌상단 원점, y는 아래로 증가.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// y는 글자 기준선
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: Color,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Element {
    pub fn text(x: f32, y: f32, size: f32, bold: bool, text: String) -> Self {
        Element::Text { x, y, size, bold, color: Color::BLACK, text }
    }

    pub fn rect(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Element::Rect { x, y, width, height, color }
    }

    pub fn line(from: (f32, f32), to: (f32, f32), color: Color) -> Self {
        Element::Line { from, to, color }
    }

    fn with_color(mut self, new_color: Color) -> Self {
        match &mut self {
            Element::Text { color, .. }
            | Element::Rect { color, .. }
            | Element::Polygon { color, .. }
            | Element::Line { color, .. } => *color = new_color,
        }
        self
    }

    /// 요소가 차지하는 사각형 (글자는 추정 폭 사용)
    pub fn bounds(&self) -> Bounds {
        match self {
            Element::Text { x, y, size, text, .. } => Bounds {
                left: *x,
                top: y - size,
                right: x + estimate_text_width(text, *size),
                bottom: y + size * DESCENT,
            },
            Element::Rect { x, y, width, height, .. } => Bounds {
                left: *x,
                top: *y,
                right: x + width,
                bottom: y + height,
            },
            Element::Polygon { points, .. } => {
                let mut bounds = Bounds {
                    left: f32::MAX,
                    top: f32::MAX,
                    right: f32::MIN,
                    bottom: f32::MIN,
                };
                for (px, py) in points {
                    bounds.left = bounds.left.min(*px);
                    bounds.right = bounds.right.max(*px);
                    bounds.top = bounds.top.min(*py);
                    bounds.bottom = bounds.bottom.max(*py);
                }
                bounds
            }
            Element::Line { from, to, .. } => Bounds {
                left: from.0.min(to.0),
                top: from.1.min(to.1),
                right: from.0.max(to.0),
                bottom: from.1.max(to.1),
            },
        }
    }
}

pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_CHAR_WIDTH
}

/// 폭을 넘으면 말줄임표로 자른다
pub fn truncate_to_width(text: &str, max_width: f32, size: f32) -> String {
    if estimate_text_width(text, size) <= max_width {
        return text.to_string();
    }
    let max_chars = (max_width / (size * AVG_CHAR_WIDTH)).floor() as usize;
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Cover,
    ProjectsSummary,
    UsersSummary,
    TasksSummary,
    ProjectDetails,
    UserDetails,
    TaskDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub kind: PageKind,
    pub elements: Vec<Element>,
}

/// PDF로 직렬화하기 전의 페이지 배치 결과
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
    /// 차트를 생략한 경우의 경고
    pub warnings: Vec<String>,
}

impl DocumentLayout {
    pub fn pages_of(&self, kind: PageKind) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(move |p| p.kind == kind)
    }
}

/// 현재 페이지와 세로 위치를 추적하며 요소를 쌓는다.
struct Composer<'a> {
    config: &'a DocumentConfig,
    pages: Vec<Page>,
    current_y: f32,
    warnings: Vec<String>,
}

impl<'a> Composer<'a> {
    fn new(config: &'a DocumentConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            current_y: config.margin,
            warnings: Vec::new(),
        }
    }

    fn left(&self) -> f32 {
        self.config.margin
    }

    fn content_width(&self) -> f32 {
        self.config.page_width - self.config.margin * 2.0
    }

    fn bottom_limit(&self) -> f32 {
        self.config.page_height - self.config.margin
    }

    fn start_page(&mut self, kind: PageKind) {
        self.pages.push(Page {
            kind,
            elements: Vec::new(),
        });
        self.current_y = self.config.margin;
    }

    /// 블록을 그리기 전에 호출. 남은 높이가 모자라면 같은 종류의 새 페이지를 연다.
    fn ensure_space(&mut self, block_height: f32) {
        if self.current_y + block_height > self.bottom_limit() {
            let kind = self
                .pages
                .last()
                .map(|p| p.kind)
                .unwrap_or(PageKind::Cover);
            self.start_page(kind);
        }
    }

    fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn heading(&mut self, title: &str) {
        self.ensure_space(HEADING_HEIGHT);
        let y = self.current_y;
        let x = self.left();
        let width = self.content_width();
        self.push(
            Element::text(x, y + HEADING_SIZE, HEADING_SIZE, true, title.to_string())
                .with_color(Color::ACCENT),
        );
        self.push(Element::line((x, y + 26.0), (x + width, y + 26.0), Color::ACCENT));
        self.current_y += HEADING_HEIGHT;
    }

    fn stat_line(&mut self, label: &str, value: &str) {
        self.ensure_space(STAT_LINE_HEIGHT);
        let baseline = self.current_y + BODY_SIZE + 2.0;
        let x = self.left();
        self.push(Element::text(x, baseline, BODY_SIZE, true, format!("{label}:")));
        let value = truncate_to_width(value, self.content_width() - STAT_VALUE_OFFSET, BODY_SIZE);
        self.push(Element::text(x + STAT_VALUE_OFFSET, baseline, BODY_SIZE, false, value));
        self.current_y += STAT_LINE_HEIGHT;
    }

    fn gap(&mut self, height: f32) {
        self.current_y += height;
    }

    fn chart<F>(&mut self, title: &str, render: F)
    where
        F: FnOnce(ChartArea) -> Result<Vec<Element>, crate::error::ChartError>,
    {
        self.ensure_space(CHART_HEIGHT);
        let area = ChartArea {
            x: self.left(),
            y: self.current_y,
            width: self.content_width(),
            height: CHART_HEIGHT,
        };

        match render(area) {
            Ok(elements) => {
                for element in elements {
                    self.push(element);
                }
            }
            Err(e) => {
                warn!(chart = title, error = %e, "차트를 생략합니다");
                self.warnings.push(e.to_string());
                self.push(
                    Element::text(area.x, area.y + 14.0, 11.0, true, title.to_string()),
                );
                self.push(
                    Element::text(area.x, area.y + 32.0, BODY_SIZE, false, "Chart unavailable".to_string())
                        .with_color(Color::GRAY),
                );
            }
        }
        self.current_y += CHART_HEIGHT + CHART_GAP;
    }

    fn finish(self) -> DocumentLayout {
        DocumentLayout {
            page_width: self.config.page_width,
            page_height: self.config.page_height,
            pages: self.pages,
            warnings: self.warnings,
        }
    }
}

/// 리포트를 페이지 단위로 배치한다. 순수 함수라 PDF 없이 검증할 수 있다.
pub fn layout_document(report: &Report, config: &DocumentConfig) -> DocumentLayout {
    let mut composer = Composer::new(config);

    cover_page(&mut composer, report);
    projects_summary_page(&mut composer, report, config.chart_top_n);
    users_summary_page(&mut composer, report, config.chart_top_n);
    tasks_summary_page(&mut composer, report);

    composer.start_page(PageKind::ProjectDetails);
    composer.heading("Project Details");
    for (i, project) in report.project_reports.iter().enumerate() {
        composer.ensure_space(config.project_row_height);
        project_row(&mut composer, i, project, config.project_row_height);
    }

    composer.start_page(PageKind::UserDetails);
    composer.heading("User Details");
    for (i, user) in report.user_reports.iter().enumerate() {
        composer.ensure_space(config.user_row_height);
        user_row(&mut composer, i, user, config.user_row_height);
    }

    composer.start_page(PageKind::TaskDetails);
    composer.heading("Task Details");
    for (i, task) in report.task_reports.iter().enumerate() {
        composer.ensure_space(config.task_row_height);
        task_row(&mut composer, i, task, config.task_row_height);
    }

    composer.finish()
}

fn cover_page(c: &mut Composer<'_>, report: &Report) {
    c.start_page(PageKind::Cover);
    let x = c.left();
    let width = c.content_width();

    c.push(Element::text(x, c.current_y + 28.0, 28.0, true, "Taskboard Report".to_string()).with_color(Color::ACCENT));
    c.push(Element::text(
        x,
        c.current_y + 50.0,
        12.0,
        false,
        format!("Generated {}", format_timestamp(&report.generated_at)),
    ).with_color(Color::GRAY));
    c.gap(COVER_HEADER_HEIGHT);

    c.ensure_space(STAT_BOX_HEIGHT);
    let box_width = (width - STAT_BOX_GAP * 2.0) / 3.0;
    let stats = [
        ("Projects", report.projects_summary.total_projects),
        ("Users", report.users_summary.total_users),
        ("Tasks", report.tasks_summary.total_tasks),
    ];
    for (i, (label, value)) in stats.iter().enumerate() {
        let bx = x + (box_width + STAT_BOX_GAP) * i as f32;
        let by = c.current_y;
        c.push(Element::rect(bx, by, box_width, STAT_BOX_HEIGHT, Color::LIGHT));
        c.push(Element::text(bx + 14.0, by + 44.0, 30.0, true, value.to_string()).with_color(Color::ACCENT));
        c.push(Element::text(bx + 14.0, by + 68.0, 11.0, false, label.to_string()).with_color(Color::GRAY));
    }
    c.gap(STAT_BOX_HEIGHT + 30.0);

    c.heading("Key Metrics");
    let tasks = &report.tasks_summary;
    c.stat_line("Completion Rate", &format!("{}%", format_decimal(tasks.completion_rate)));
    c.stat_line("Completed This Week", &tasks.completed_this_week.to_string());
    c.stat_line("Completed This Month", &tasks.completed_this_month.to_string());
    c.stat_line(
        "Average Tasks Per Project",
        &format_decimal(report.projects_summary.average_tasks_per_project),
    );
    c.stat_line("Most Active User", &most_active_label(report));
}

fn projects_summary_page(c: &mut Composer<'_>, report: &Report, top_n: usize) {
    c.start_page(PageKind::ProjectsSummary);
    c.heading("Projects Summary");
    let s = &report.projects_summary;
    c.stat_line("Total Projects", &s.total_projects.to_string());
    c.stat_line("Projects With Tasks", &s.projects_with_tasks.to_string());
    c.stat_line("Projects Without Tasks", &s.projects_without_tasks.to_string());
    c.stat_line("Total Tasks Across Projects", &s.total_tasks_across_projects.to_string());
    c.stat_line("Average Tasks Per Project", &format_decimal(s.average_tasks_per_project));
    c.stat_line("Oldest Project", &format_optional_timestamp(&s.oldest_project));
    c.stat_line("Newest Project", &format_optional_timestamp(&s.newest_project));
    c.gap(CHART_GAP);

    let bars = top_projects_by_completion(&report.project_reports, top_n);
    let title = format!("Top {top_n} Projects by Completion Rate");
    c.chart(&title, |area| {
        BarChart::new(title.clone(), bars)
            .with_max(100.0)
            .with_suffix("%")
            .render(area)
    });
}

fn users_summary_page(c: &mut Composer<'_>, report: &Report, top_n: usize) {
    c.start_page(PageKind::UsersSummary);
    c.heading("Users Summary");
    let s = &report.users_summary;
    c.stat_line("Total Users", &s.total_users.to_string());
    c.stat_line("Users With Tasks", &s.users_with_tasks.to_string());
    c.stat_line("Users Without Tasks", &s.users_without_tasks.to_string());
    c.stat_line("Total Tasks Assigned", &s.total_tasks_assigned.to_string());
    c.stat_line("Average Tasks Per User", &format_decimal(s.average_tasks_per_user));
    c.stat_line("Most Active User", &most_active_label(report));
    c.gap(CHART_GAP);

    let bars = top_users_by_productivity(&report.user_reports, top_n);
    let title = format!("Top {top_n} Users by Completed Tasks");
    c.chart(&title, |area| BarChart::new(title.clone(), bars).render(area));
}

fn tasks_summary_page(c: &mut Composer<'_>, report: &Report) {
    c.start_page(PageKind::TasksSummary);
    c.heading("Tasks Summary");
    let s = &report.tasks_summary;
    c.stat_line("Total Tasks", &s.total_tasks.to_string());
    c.stat_line("Completion Rate", &format!("{}%", format_decimal(s.completion_rate)));
    c.stat_line("Completed This Week", &s.completed_this_week.to_string());
    c.stat_line("Completed This Month", &s.completed_this_month.to_string());
    c.stat_line("Oldest Task", &format_optional_timestamp(&s.oldest_task));
    c.stat_line("Newest Task", &format_optional_timestamp(&s.newest_task));
    c.gap(CHART_GAP);

    let mut status_bars = vec![
        Bar { label: "Unassigned".to_string(), value: s.unassigned_tasks as f64 },
        Bar { label: "In Progress".to_string(), value: s.in_progress_tasks as f64 },
        Bar { label: "Completed".to_string(), value: s.completed_tasks as f64 },
        Bar { label: "Deferred".to_string(), value: s.deferred_tasks as f64 },
    ];
    let known = s.unassigned_tasks + s.in_progress_tasks + s.completed_tasks + s.deferred_tasks;
    if s.total_tasks > known {
        status_bars.push(Bar { label: "Other".to_string(), value: (s.total_tasks - known) as f64 });
    }
    c.chart("Status Distribution", |area| {
        BarChart::new("Status Distribution", status_bars).render(area)
    });

    let slices = s
        .tasks_by_type
        .iter()
        .map(|(label, count)| Bar { label: label.clone(), value: *count as f64 })
        .collect();
    c.chart("Task Types", |area| RingChart::new("Task Types", slices).render(area));
}

fn project_row(c: &mut Composer<'_>, index: usize, project: &ProjectReport, height: f32) {
    let x = c.left();
    let width = c.content_width();
    let top = c.current_y;

    if index % 2 == 1 {
        c.push(Element::rect(x, top, width, height, Color::LIGHT));
    }
    let title = truncate_to_width(&format!("{}. {}", index + 1, project.title), width - 8.0, 11.0);
    c.push(Element::text(x + 4.0, top + 14.0, 11.0, true, title));
    let stats = format!(
        "Tasks {} | Completed {} | In Progress {} | Unassigned {} | Deferred {} | Members {} | {}%",
        project.task_count,
        project.completed_tasks,
        project.in_progress_tasks,
        project.unassigned_tasks,
        project.deferred_tasks,
        project.user_count,
        format_decimal(project.completion_rate),
    );
    c.push(Element::text(x + 4.0, top + 28.0, 8.0, false, truncate_to_width(&stats, width - 8.0, 8.0)).with_color(Color::GRAY));
    c.current_y += height;
}

fn user_row(c: &mut Composer<'_>, index: usize, user: &UserReport, height: f32) {
    let x = c.left();
    let width = c.content_width();
    let top = c.current_y;

    if index % 2 == 1 {
        c.push(Element::rect(x, top, width, height, Color::LIGHT));
    }
    let name = truncate_to_width(&format!("{}. {}", index + 1, user.full_name), width - 8.0, 11.0);
    c.push(Element::text(x + 4.0, top + 14.0, 11.0, true, name));
    let roles = if user.roles.is_empty() { "None".to_string() } else { user.roles.join(", ") };
    let stats = format!(
        "Roles {} | Assigned {} | Completed {} | In Progress {} | Projects {} | {}%",
        roles,
        user.task_count,
        user.completed_tasks,
        user.in_progress_tasks,
        user.project_count,
        format_decimal(user.completion_rate),
    );
    c.push(Element::text(x + 4.0, top + 28.0, 8.0, false, truncate_to_width(&stats, width - 8.0, 8.0)).with_color(Color::GRAY));
    c.current_y += height;
}

fn task_row(c: &mut Composer<'_>, index: usize, task: &TaskReport, height: f32) {
    let x = c.left();
    let width = c.content_width();
    let top = c.current_y;

    if index % 2 == 1 {
        c.push(Element::rect(x, top, width, height, Color::LIGHT));
    }
    let name = truncate_to_width(&format!("{}. {}", index + 1, task.name), width - 8.0, 11.0);
    c.push(Element::text(x + 4.0, top + 14.0, 11.0, true, name));
    let meta = format!(
        "{} | {} | {} | Project: {} | Assigned: {}",
        task.status,
        task.priority,
        task.task_type,
        task.project_name,
        task.assigned_user_name.as_deref().unwrap_or("Unassigned"),
    );
    c.push(Element::text(x + 4.0, top + 28.0, 8.0, false, truncate_to_width(&meta, width - 8.0, 8.0)).with_color(Color::GRAY));
    let dates = format!(
        "Created {} | Completed {} | Checklist {}/{}",
        format_timestamp(&task.created_at),
        format_optional_timestamp(&task.completed_at),
        task.completed_item_count,
        task.item_count,
    );
    c.push(Element::text(x + 4.0, top + 40.0, 8.0, false, truncate_to_width(&dates, width - 8.0, 8.0)).with_color(Color::GRAY));
    c.current_y += height;
}

fn most_active_label(report: &Report) -> String {
    match &report.users_summary.most_active_user {
        Some(name) => format!("{} ({} tasks)", name, report.users_summary.most_active_user_task_count),
        None => "N/A".to_string(),
    }
}

/// 완료율 내림차순, 같으면 작업 수 내림차순 (안정 정렬)
fn top_projects_by_completion(projects: &[ProjectReport], top_n: usize) -> Vec<Bar> {
    let mut ranked: Vec<&ProjectReport> = projects.iter().filter(|p| p.task_count > 0).collect();
    ranked.sort_by(|a, b| {
        b.completion_rate
            .total_cmp(&a.completion_rate)
            .then(b.task_count.cmp(&a.task_count))
    });
    ranked
        .into_iter()
        .take(top_n)
        .map(|p| Bar { label: p.title.clone(), value: p.completion_rate })
        .collect()
}

fn top_users_by_productivity(users: &[UserReport], top_n: usize) -> Vec<Bar> {
    let mut ranked: Vec<&UserReport> = users.iter().filter(|u| u.task_count > 0).collect();
    ranked.sort_by(|a, b| {
        b.completed_tasks
            .cmp(&a.completed_tasks)
            .then(b.task_count.cmp(&a.task_count))
    });
    ranked
        .into_iter()
        .take(top_n)
        .map(|u| Bar { label: u.full_name.clone(), value: u.completed_tasks as f64 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::model::EntitySnapshot;
    use crate::report::ReportBuilder;

    fn empty_report() -> Report {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        ReportBuilder::build(&EntitySnapshot::default(), now)
    }

    #[test]
    fn overflow_starts_new_page_of_same_kind() {
        let config = DocumentConfig::default();
        let mut c = Composer::new(&config);
        c.start_page(PageKind::UserDetails);
        c.current_y = config.page_height - config.margin - 10.0;

        c.ensure_space(10.0);
        assert_eq!(c.pages.len(), 1, "exact fit stays on the page");

        c.ensure_space(10.5);
        assert_eq!(c.pages.len(), 2);
        assert_eq!(c.pages[1].kind, PageKind::UserDetails);
        assert_eq!(c.current_y, config.margin);
    }

    #[test]
    fn empty_report_lays_out_every_page_kind_with_warnings() {
        let layout = layout_document(&empty_report(), &DocumentConfig::default());

        let kinds: Vec<PageKind> = layout.pages.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PageKind::Cover,
                PageKind::ProjectsSummary,
                PageKind::UsersSummary,
                PageKind::TasksSummary,
                PageKind::ProjectDetails,
                PageKind::UserDetails,
                PageKind::TaskDetails,
            ]
        );
        // 차트 4개 모두 데이터가 없다
        assert_eq!(layout.warnings.len(), 4);
        let tasks_page = layout.pages_of(PageKind::TasksSummary).next().unwrap();
        assert!(tasks_page.elements.iter().any(|e| matches!(
            e,
            Element::Text { text, .. } if text == "Total Tasks:"
        )));
    }

    #[test]
    fn smallest_accepted_page_keeps_content_above_bottom_margin() {
        let mut config = DocumentConfig::default();
        config.page_height = tallest_block_height() + config.margin * 2.0;
        assert!(crate::config::validate_document(&config).is_ok());

        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let snapshot = crate::store::sample_snapshot(&crate::store::SeedOptions::default(), now);
        let layout = layout_document(&ReportBuilder::build(&snapshot, now), &config);
        assert!(layout.warnings.is_empty(), "{:?}", layout.warnings);

        let limit = config.page_height - config.margin;
        for page in &layout.pages {
            for element in &page.elements {
                assert!(element.bounds().bottom <= limit, "{:?} on {:?}", element, page.kind);
            }
        }
    }

    #[test]
    fn long_stat_values_stay_inside_right_margin() {
        let config = DocumentConfig::default();
        let mut c = Composer::new(&config);
        c.start_page(PageKind::UsersSummary);
        c.stat_line("Most Active User", &"Very Long Name ".repeat(20));

        let right_limit = config.page_width - config.margin;
        for element in &c.pages[0].elements {
            assert!(element.bounds().right <= right_limit, "{:?}", element);
        }
    }

    #[test]
    fn truncation_keeps_text_within_width() {
        let long = "x".repeat(200);
        let cut = truncate_to_width(&long, 100.0, 10.0);
        assert!(cut.ends_with("..."));
        assert!(estimate_text_width(&cut, 10.0) <= 100.0);
        assert_eq!(truncate_to_width("short", 100.0, 10.0), "short");
    }

    #[test]
    fn project_ranking_is_stable_and_limited() {
        let report = empty_report();
        let template = ProjectReport {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            created_at: report.generated_at,
            updated_at: None,
            task_count: 2,
            completed_tasks: 1,
            in_progress_tasks: 0,
            unassigned_tasks: 0,
            deferred_tasks: 0,
            user_count: 0,
            completion_rate: 50.0,
        };
        let projects: Vec<ProjectReport> = (0..12)
            .map(|i| ProjectReport { title: format!("p{i}"), ..template.clone() })
            .collect();

        let bars = top_projects_by_completion(&projects, 10);
        assert_eq!(bars.len(), 10);
        assert_eq!(bars[0].label, "p0");
        assert_eq!(bars[9].label, "p9");
    }
}
