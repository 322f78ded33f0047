//! Feed screen: the latest posts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use clique_app::FeedState;
use clique_core::Post;

use super::spinner_frame;
use crate::theme::Theme;

/// Rows per post: title line and description line
const POST_HEIGHT: u16 = 2;

pub struct FeedView<'a> {
    feed: &'a FeedState,
    theme: &'a Theme,
    tick: u64,
}

impl<'a> FeedView<'a> {
    pub fn new(feed: &'a FeedState, theme: &'a Theme) -> Self {
        Self {
            feed,
            theme,
            tick: 0,
        }
    }

    /// Animation frame for the loading spinner
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn post_lines(&self, post: &Post, selected: bool) -> [Line<'static>; 2] {
        let row_style = if selected {
            self.theme.selected
        } else {
            self.theme.text
        };
        let marker = if selected { "▶ " } else { "  " };

        let mut title = vec![
            Span::styled(marker, self.theme.accent),
            Span::styled(post.title.clone(), row_style),
        ];
        if let Some(club) = &post.club_name {
            title.push(Span::styled(format!("  · {club}"), self.theme.label));
        }
        if post.has_media() {
            let badge = if post.video_data.is_some() {
                "  [video]"
            } else {
                "  [image]"
            };
            title.push(Span::styled(badge, self.theme.accent));
        }
        if let Some(created) = post.created_at {
            title.push(Span::styled(
                format!("  {}", created.format("%b %d %H:%M")),
                self.theme.muted,
            ));
        }

        let description = Line::from(vec![
            Span::raw("    "),
            Span::styled(
                post.description.clone().unwrap_or_default(),
                self.theme.muted,
            ),
        ]);

        [Line::from(title), description]
    }
}

impl Widget for FeedView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.theme.block(false).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Latest posts", self.theme.label_focused),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.feed.loading {
            Paragraph::new(Line::from(vec![
                Span::styled(spinner_frame(self.tick), self.theme.accent),
                Span::styled(" Loading posts…", self.theme.muted),
            ]))
            .render(inner, buf);
            return;
        }

        if self.feed.posts.is_empty() {
            Paragraph::new(Line::styled(
                "No posts yet. Press r to refresh.",
                self.theme.muted,
            ))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let visible = usize::from(inner.height / POST_HEIGHT).max(1);
        let first = self.feed.selected.saturating_sub(visible - 1);

        let lines: Vec<Line> = self
            .feed
            .posts
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .flat_map(|(i, post)| self.post_lines(post, i == self.feed.selected))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
