//! # Projects Panel
//!
//! Two-column card grid. Each card shows the project title, an optional
//! reach note, the description, and its tags. Linked tags get a `↗` and the
//! URL is listed under the tag row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::content::{Project, Tag};
use crate::tui::component::Component;
use crate::tui::components::layout::{card_height, card_width, grid_columns, grid_rects};
use crate::tui::theme;

pub struct Projects<'a> {
    projects: &'a [Project],
}

impl<'a> Projects<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { projects }
    }

    fn tag_span(tag: &Tag) -> Span<'static> {
        let label = match tag.url() {
            Some(_) => format!("[{} ↗]", tag.name().to_uppercase()),
            None => format!("[{}]", tag.name().to_uppercase()),
        };
        Span::styled(label, theme::accent())
    }

    /// Distinct URLs in tag order; tags often share one.
    fn links(project: &Project) -> Vec<&str> {
        let mut urls: Vec<&str> = Vec::new();
        for url in project.tags.iter().filter_map(Tag::url) {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }

    fn card_lines(project: &Project) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        if let Some(country) = &project.country {
            lines.push(Line::from(Span::styled(
                country.to_uppercase(),
                theme::accent().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(Span::styled(project.desc.as_str(), theme::body())));
        if !project.tags.is_empty() {
            let mut spans = Vec::new();
            for (i, tag) in project.tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Self::tag_span(tag));
            }
            lines.push(Line::from(spans));
        }
        for url in Self::links(project) {
            lines.push(Line::from(Span::styled(url, theme::muted())));
        }
        lines
    }

    fn card_rows(project: &Project, width: u16) -> u16 {
        let tag_row = project
            .tags
            .iter()
            .map(|t| Self::tag_span(t).content.into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        let mut wrapped = vec![project.desc.as_str()];
        if !tag_row.is_empty() {
            wrapped.push(tag_row.as_str());
        }
        let links = Self::links(project);
        wrapped.extend(links.iter().copied());
        let country = u16::from(project.country.is_some());
        card_height(&wrapped, country, width)
    }
}

impl Component for Projects<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cols = grid_columns(area.width, 2);
        let width = card_width(area.width, cols);
        let heights: Vec<u16> = self
            .projects
            .iter()
            .map(|project| Self::card_rows(project, width))
            .collect();

        for (project, rect) in self.projects.iter().zip(grid_rects(area, &heights, cols)) {
            if rect.is_empty() {
                continue;
            }
            let block = Block::bordered()
                .border_style(theme::border())
                .title(Span::styled(format!(" {} ", project.title), theme::heading()))
                .padding(Padding::horizontal(1));
            frame.render_widget(
                Paragraph::new(Self::card_lines(project))
                    .block(block)
                    .wrap(Wrap { trim: true }),
                rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn projects() -> Vec<Project> {
        vec![
            Project {
                title: "Secura Cloud".to_string(),
                country: None,
                desc: "Automated workflows.".to_string(),
                tags: vec![
                    Tag::Link {
                        name: "Cloud".to_string(),
                        url: "https://securacloud.io/".to_string(),
                    },
                    Tag::Link {
                        name: "SaaS".to_string(),
                        url: "https://securacloud.io/".to_string(),
                    },
                ],
            },
            Project {
                title: "Motive".to_string(),
                country: Some("Scaled to Mexico & UK".to_string()),
                desc: "Led product expansion.".to_string(),
                tags: vec![Tag::Label("Growth".to_string())],
            },
        ]
    }

    #[test]
    fn test_links_are_deduplicated() {
        let projects = projects();
        assert_eq!(Projects::links(&projects[0]), vec!["https://securacloud.io/"]);
        assert!(Projects::links(&projects[1]).is_empty());
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(Projects::tag_span(&Tag::Label("i18n".to_string())).content, "[I18N]");
        let link = Tag::Link {
            name: "Figma".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(Projects::tag_span(&link).content, "[FIGMA ↗]");
    }

    #[test]
    fn test_card_rows_counts_country_and_links() {
        let projects = projects();
        // desc + tags + one url + borders
        assert_eq!(Projects::card_rows(&projects[0], 60), 5);
        // country + desc + tags + borders
        assert_eq!(Projects::card_rows(&projects[1], 60), 5);
    }

    #[test]
    fn test_renders_cards() {
        let projects = projects();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Projects::new(&projects).render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Secura Cloud"));
        assert!(text.contains("SCALED TO MEXICO & UK"));
        assert!(text.contains("[GROWTH]"));
        assert!(text.contains("https://securacloud.io/"));
    }
}
