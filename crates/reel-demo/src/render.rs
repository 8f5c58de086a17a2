//! Plain-text rendering of carousel frames.

use std::fmt::Write as _;
use std::time::Duration;

use reel_core::{CarouselEvent, CarouselView, NavButton, TeamMember};

/// Short name for an input event.
#[must_use]
pub fn event_label(event: Option<&CarouselEvent>) -> String {
    match event {
        None => "idle".to_string(),
        Some(CarouselEvent::Next) => "next".to_string(),
        Some(CarouselEvent::Previous) => "previous".to_string(),
        Some(CarouselEvent::GoTo(index)) => format!("go_to({index})"),
        Some(CarouselEvent::Resize { width }) => format!("resize({width})"),
        Some(CarouselEvent::PointerEnter) => "pointer_enter".to_string(),
        Some(CarouselEvent::PointerLeave) => "pointer_leave".to_string(),
        Some(CarouselEvent::TouchStart { x }) => format!("touch_start({x})"),
        Some(CarouselEvent::TouchMove { x }) => format!("touch_move({x})"),
        Some(CarouselEvent::TouchEnd) => "touch_end".to_string(),
    }
}

/// Indicator row, e.g. `○ ● ○ ○`.
#[must_use]
pub fn indicator_row(view: &CarouselView) -> String {
    view.indicators()
        .map(|dot| if dot.active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per frame: time, event, layout, indicators, flags, active member.
#[must_use]
pub fn frame_line(
    at: Duration,
    event: Option<&CarouselEvent>,
    view: &CarouselView,
    member: &TeamMember,
) -> String {
    let mut line = format!(
        "[{:>7.3}s] {:<16} {:<7} offset={:>8.3}%  {}",
        at.as_secs_f64(),
        event_label(event),
        if view.mode.is_mobile() { "mobile" } else { "desktop" },
        view.offset_percent,
        indicator_row(view),
    );
    for (flag, label) in [
        (view.locked, "locked"),
        (view.paused, "paused"),
        (view.touching, "touching"),
    ] {
        if flag {
            let _ = write!(line, " {label}");
        }
    }
    let _ = write!(line, "  | {} ({})", member.name, member.role);
    line
}

/// Multi-line card for a member, with accessible link labels.
#[must_use]
pub fn member_card(member: &TeamMember) -> String {
    let mut card = format!("{}\n  {}\n", member.name, member.role);
    if !member.bio.is_empty() {
        let _ = writeln!(card, "  {}", member.bio);
    }
    for (kind, url) in member.social.iter() {
        let _ = writeln!(card, "  [{}] {url}", kind.label());
    }
    card
}

/// Footer describing the controls the view exposes.
#[must_use]
pub fn controls_legend(view: &CarouselView) -> String {
    let dots: Vec<String> = view.indicators().map(|dot| dot.label()).collect();
    format!(
        "controls: {} | {} | {}",
        NavButton::Previous.label(),
        NavButton::Next.label(),
        dots.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::{CarouselConfig, CarouselController, Roster};

    fn controller() -> CarouselController<TeamMember> {
        CarouselController::new(Roster::builtin().into_members(), CarouselConfig::default())
            .expect("non-empty")
    }

    #[test]
    fn indicator_row_marks_cursor() {
        let mut c = controller();
        c.go_to(2);
        assert_eq!(indicator_row(&c.view()), "○ ○ ● ○");
    }

    #[test]
    fn frame_line_lists_flags_and_member() {
        let mut c = controller();
        c.advance();
        c.on_pause_enter();
        let line = frame_line(
            Duration::from_millis(1500),
            Some(&CarouselEvent::Next),
            &c.view(),
            c.current(),
        );
        assert!(line.starts_with("[  1.500s] next"), "{line}");
        assert!(line.contains("offset= -33.333%"), "{line}");
        assert!(line.contains(" locked paused"), "{line}");
        assert!(!line.contains("touching"), "{line}");
        assert!(line.ends_with("| Member Two (UI Designer and Backend Developer)"), "{line}");
    }

    #[test]
    fn event_labels() {
        assert_eq!(event_label(None), "idle");
        assert_eq!(event_label(Some(&CarouselEvent::GoTo(-1))), "go_to(-1)");
        assert_eq!(
            event_label(Some(&CarouselEvent::Resize { width: 375 })),
            "resize(375)"
        );
    }

    #[test]
    fn member_card_includes_link_labels() {
        let roster = Roster::builtin();
        let card = member_card(&roster.members()[0]);
        assert!(card.starts_with("Member One\n  Lead AI Researcher\n"));
        assert!(card.contains("[GitHub Profile] https://github.com/member-one"));
        assert!(card.contains("[Email Contact] mailto:member-one@example.org"));
    }

    #[test]
    fn legend_names_every_control() {
        let legend = controls_legend(&controller().view());
        assert!(legend.starts_with("controls: Previous slide | Next slide | Go to slide 1"));
        assert!(legend.ends_with("Go to slide 4"));
    }
}
