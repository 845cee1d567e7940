//! Markup rendering for answers and related tickets.
//!
//! Server text is escaped first; the only markup introduced afterwards is
//! `<strong>` for `**bold**` spans and `<br>` for newlines.

use std::sync::OnceLock;

use regex::Regex;

use crate::messages::Ticket;

/// Ticket list content when the server returned no tickets.
pub const NO_TICKETS_MARKUP: &str =
    r#"<li class="ticket-item ticket-empty">No related tickets found</li>"#;

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    // Non-greedy and single-line, so `**a** b **c**` yields two spans.
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

/// Render answer text: escape, then bold spans, then line breaks.
/// Unmatched `**` markers stay literal.
pub fn render_answer(answer: &str) -> String {
    let escaped = html_escape::encode_safe(answer);
    let bolded = bold_pattern().replace_all(&escaped, "<strong>$1</strong>");
    bolded.replace('\n', "<br>")
}

/// Render one list item per ticket in arrival order, or the placeholder item.
pub fn render_tickets(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return NO_TICKETS_MARKUP.to_string();
    }
    tickets.iter().map(render_ticket).collect()
}

fn render_ticket(ticket: &Ticket) -> String {
    format!(
        concat!(
            r#"<li class="ticket-item">"#,
            r#"<a class="ticket-link">{}: {}</a>"#,
            r#"<div class="ticket-meta">{}</div>"#,
            "</li>"
        ),
        html_escape::encode_safe(&ticket.ticket_id),
        html_escape::encode_safe(&ticket.issue),
        html_escape::encode_safe(&ticket.resolution),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, issue: &str, resolution: &str) -> Ticket {
        Ticket {
            ticket_id: id.into(),
            issue: issue.into(),
            resolution: resolution.into(),
        }
    }

    #[test]
    fn bold_and_newlines() {
        assert_eq!(
            render_answer("**Hi** there\nBye"),
            "<strong>Hi</strong> there<br>Bye"
        );
    }

    #[test]
    fn every_bold_span_is_converted() {
        assert_eq!(
            render_answer("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(render_answer("5 ** 3"), "5 ** 3");
        assert_eq!(render_answer("**open\nclose**"), "**open<br>close**");
    }

    #[test]
    fn answer_markup_is_escaped() {
        assert_eq!(
            render_answer("<script>alert(1)</script> **x&y**"),
            "&lt;script&gt;alert(1)&lt;&#x2F;script&gt; <strong>x&amp;y</strong>"
        );
    }

    #[test]
    fn empty_ticket_list_is_placeholder() {
        assert_eq!(render_tickets(&[]), NO_TICKETS_MARKUP);
    }

    #[test]
    fn ticket_item_shows_id_issue_and_resolution() {
        let html = render_tickets(&[ticket("T1", "X", "Y")]);
        assert_eq!(
            html,
            r#"<li class="ticket-item"><a class="ticket-link">T1: X</a><div class="ticket-meta">Y</div></li>"#
        );
    }

    #[test]
    fn ticket_fields_are_escaped() {
        let html = render_tickets(&[ticket("T<1>", "\"quoted\"", "a & b")]);
        assert!(html.contains("T&lt;1&gt;: &quot;quoted&quot;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<1>"));
    }

    #[test]
    fn tickets_render_in_order() {
        let html = render_tickets(&[ticket("B", "2", "-"), ticket("A", "1", "-")]);
        let b = html.find("B: 2").unwrap();
        let a = html.find("A: 1").unwrap();
        assert!(b < a);
        assert_eq!(html.matches("<li").count(), 2);
    }
}
