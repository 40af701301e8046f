use std::time::{Duration, Instant};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::theme;

/// Hero slides rotate on a fixed interval, matching the web landing page.
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(10);

pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        title: "Your Journey, Our Pathway",
        subtitle: "Learning is Better Together. Grow in Style with LearnHub",
    },
    Slide {
        title: "Real-time Collaborations",
        subtitle: "Exclusively on LearnHub",
    },
    Slide {
        title: "Wanna Join a Geng or Invite a Friend?",
        subtitle: "Learning is more fun with LearnHub Gengs.",
    },
    Slide {
        title: "Our Secret to Success?",
        subtitle: "Chase EXCELLENCE and SUCCESS will chase you.",
    },
];

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Group Chats",
        description: "Create and manage group chats for your study groups or project teams.",
    },
    Feature {
        title: "Direct Messaging",
        description: "Connect one-on-one with classmates, mentors, or instructors.",
    },
    Feature {
        title: "File Sharing",
        description: "Easily share documents, presentations, and other files within your chats.",
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "LearnHub has completely transformed how I collaborate with my study group. \
                The chat features are intuitive and make communication a breeze!",
        author: "Timi Johnson, Computer Science Major",
    },
    Testimonial {
        quote: "As a postgraduate student, LearnHub has made it so much easier to manage my \
                classes online and communicate with my fellow students.",
        author: "Alexa R., Ph.D in Psychology",
    },
    Testimonial {
        quote: "The collaborative features have revolutionized our group projects. It's like \
                having a virtual study room available 24/7!",
        author: "Alex T., Engineering Student",
    },
    Testimonial {
        quote: "LearnHub's task management tools have helped me stay organized and on top of \
                my coursework. My productivity has skyrocketed!",
        author: "Emily L., Psychology Major",
    },
];

const PARTNERS: &str = "MIT - Harvard - Stanford - Yale - ALX - ALU";

/// Auto-advancing hero slide state.
#[derive(Debug)]
pub struct Carousel {
    pub slide: usize,
    last_advance: Instant,
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            slide: 0,
            last_advance: Instant::now(),
        }
    }

    /// Advance when the interval has elapsed. Called from the main loop;
    /// the timer dies with the loop, nothing to cancel.
    pub fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_advance) >= SLIDE_INTERVAL {
            self.slide = (self.slide + 1) % SLIDES.len();
            self.last_advance = now;
        }
    }

    pub fn next_slide(&mut self) {
        self.slide = (self.slide + 1) % SLIDES.len();
        self.last_advance = Instant::now();
    }

    pub fn prev_slide(&mut self) {
        self.slide = (self.slide + SLIDES.len() - 1) % SLIDES.len();
        self.last_advance = Instant::now();
    }
}

pub struct Landing;

impl Landing {
    pub fn render(frame: &mut Frame, area: Rect, carousel: &Carousel) {
        let rows = Layout::vertical([
            Constraint::Length(7),  // hero
            Constraint::Length(1),  // partners
            Constraint::Min(5),     // features
            Constraint::Length(4),  // testimonial
        ])
        .split(area);

        render_hero(frame, rows[0], carousel);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Trusted by learners at: ", theme::DIM_STYLE),
                Span::styled(PARTNERS, theme::HEADER_STYLE),
            ])),
            rows[1],
        );

        render_features(frame, rows[2]);
        render_testimonial(frame, rows[3], carousel.slide % TESTIMONIALS.len());
    }
}

fn render_hero(frame: &mut Frame, area: Rect, carousel: &Carousel) {
    let block = Block::default()
        .title(" LearnHub ")
        .title_style(theme::current().accent)
        .borders(Borders::ALL)
        .border_style(theme::current().accent);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slide = &SLIDES[carousel.slide % SLIDES.len()];
    let dots: String = (0..SLIDES.len())
        .map(|i| if i == carousel.slide { "* " } else { ". " })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            slide.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(slide.subtitle, theme::DIM_STYLE)),
        Line::from(""),
        Line::from(vec![
            Span::styled(dots, theme::current().accent),
            Span::styled("  h/l: browse slides", theme::DIM_STYLE),
        ]),
        Line::from(vec![
            Span::styled("2", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(": try the calendar   ", theme::DIM_STYLE),
            Span::styled("3", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(": sign up now", theme::DIM_STYLE),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Why LearnHub ")
        .title_style(theme::HEADER_STYLE)
        .borders(Borders::ALL)
        .border_style(theme::BORDER_STYLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for feature in &FEATURES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", feature.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(feature.description, theme::DIM_STYLE),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_testimonial(frame: &mut Frame, area: Rect, index: usize) {
    let testimonial = &TESTIMONIALS[index];
    let lines = vec![
        Line::from(Span::styled(
            format!("\"{}\"", testimonial.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("  -- {}", testimonial.author),
            theme::DIM_STYLE,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_only_after_the_interval() {
        let mut carousel = Carousel::new();
        let soon = Instant::now() + Duration::from_secs(1);
        carousel.tick(soon);
        assert_eq!(carousel.slide, 0);

        let later = Instant::now() + SLIDE_INTERVAL;
        carousel.tick(later);
        assert_eq!(carousel.slide, 1);
    }

    #[test]
    fn slides_wrap_in_both_directions() {
        let mut carousel = Carousel::new();
        carousel.prev_slide();
        assert_eq!(carousel.slide, SLIDES.len() - 1);
        carousel.next_slide();
        assert_eq!(carousel.slide, 0);
        for _ in 0..SLIDES.len() {
            carousel.next_slide();
        }
        assert_eq!(carousel.slide, 0);
    }
}
