use super::model::BoardView;

/// Presentation capability set. Any toolkit that can draw the four board
/// panels can front the core.
pub trait BoardRenderer {
    fn render_topics(&mut self, view: &BoardView);
    fn render_suggestions(&mut self, view: &BoardView);
    fn render_work(&mut self, view: &BoardView);
    fn render_form(&mut self, view: &BoardView);
}

pub fn render_board<R: BoardRenderer + ?Sized>(renderer: &mut R, view: &BoardView) {
    renderer.render_topics(view);
    renderer.render_form(view);
    renderer.render_suggestions(view);
    renderer.render_work(view);
}

/// Plain-text renderer for terminals and snapshots.
#[derive(Debug, Default)]
pub struct TextRenderer {
    out: Vec<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        let mut s = self.out.join("\n");
        s.push('\n');
        s
    }
}

fn tag_list(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

impl BoardRenderer for TextRenderer {
    fn render_topics(&mut self, view: &BoardView) {
        self.out.push(format!(
            "## Topics (filter: {}) {}",
            view.topic_filter,
            view.topic_count_label()
        ));
        for t in &view.topics {
            self.out
                .push(format!("- [{}] {} {}", t.badge_label, t.title, tag_list(&t.tags)));
        }
        self.out.push(String::new());
    }

    fn render_suggestions(&mut self, view: &BoardView) {
        self.out.push(format!(
            "## Suggestions (sort: {}) {}",
            view.sort,
            view.suggestion_count_label()
        ));
        for s in &view.suggestions {
            let marker = if s.upvoted {
                "^"
            } else if s.downvoted {
                "v"
            } else {
                " "
            };
            let created = s
                .created_on
                .as_deref()
                .map(|d| format!(" [{}]", d))
                .unwrap_or_default();
            self.out.push(format!(
                "{}{:>4}  {} ({}) {}{}",
                marker,
                s.votes,
                s.title,
                s.id,
                tag_list(&s.tags),
                created
            ));
            if let Some(details) = &s.details {
                self.out.push(format!("       {}", details));
            }
        }
        self.out.push(String::new());
    }

    fn render_work(&mut self, view: &BoardView) {
        self.out.push("## Work in progress".to_string());
        for w in &view.work {
            self.out
                .push(format!("- {} [{}] {}%", w.title, w.stage_label, w.progress));
            if let Some(notes) = &w.notes {
                self.out.push(format!("  {}", notes));
            }
        }
    }

    fn render_form(&mut self, view: &BoardView) {
        self.out.push("## Suggest a topic".to_string());
        self.out.push(format!("title: {}", view.form.title));
        self.out.push(format!("details: {}", view.form.details));
        self.out.push(format!("tags: {}", view.form.tags));
        self.out.push(format!(
            "[Submit]{}",
            if view.can_submit { "" } else { " (disabled)" }
        ));
        self.out.push(String::new());
    }
}

pub fn render_text(view: &BoardView) -> String {
    let mut r = TextRenderer::new();
    render_board(&mut r, view);
    r.finish()
}
