//! Artwork panel: details of the current artwork or the request status.

use artpal_types::ArtworkStatus;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct ArtworkComponent;

impl ArtworkComponent {
    fn detail_line<'a>(theme: &dyn Theme, label: &'a str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<11}"), theme.text_muted_style()),
            Span::styled(value, theme.text_primary_style()),
        ])
    }
}

impl Component for ArtworkComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Artwork "), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let lines = match (app.gallery.current_artwork(), app.gallery.status()) {
            (Some(artwork), _) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        artwork.title.as_str(),
                        theme.accent_emphasis_style().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(artwork.caption(), theme.text_secondary_style())),
                    Line::default(),
                ];
                if !artwork.department.is_empty() {
                    lines.push(Self::detail_line(theme, "Department", &artwork.department));
                }
                if !artwork.medium.is_empty() {
                    lines.push(Self::detail_line(theme, "Medium", &artwork.medium));
                }
                lines.push(Self::detail_line(theme, "Image", &artwork.primary_image_small));
                if !artwork.object_url.is_empty() {
                    lines.push(Self::detail_line(theme, "Link", &artwork.object_url));
                }
                lines
            }
            (None, ArtworkStatus::Loading) => vec![Line::from(vec![
                Span::styled(app.throbber_frame(), theme.accent_primary_style()),
                Span::styled(" Finding an artwork with an image…", theme.text_secondary_style()),
            ])],
            (None, ArtworkStatus::Failed(message)) => vec![
                Line::from(Span::styled("Could not load an artwork", theme.status_error())),
                Line::from(Span::styled(message.as_str(), theme.text_secondary_style())),
                Line::default(),
                Line::from(Span::styled("Press a to try again", theme.text_muted_style())),
            ],
            (None, _) => vec![Line::from(Span::styled("No artwork yet", theme.text_muted_style()))],
        };

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
