//! Shareable roster text

use crate::order::{Order, Person};

/// First line of the shared roster
pub const SHARE_TITLE: &str = "Tim Hortons Run";

/// Plain-text roster for sharing
///
/// One line per person with a submitted order; people without one are left
/// out.
#[must_use]
pub fn roster_share_text(people: &[Person]) -> String {
    let mut lines = vec![SHARE_TITLE.to_string()];
    lines.extend(people.iter().filter_map(|p| {
        p.last_order
            .as_ref()
            .map(|order| share_line(&p.name, order))
    }));
    lines.join("\n")
}

fn share_line(name: &str, order: &Order) -> String {
    let mut parts = vec![
        format!("{name}:"),
        order.size.to_string(),
        order.drink.to_string(),
    ];
    if order.decaf {
        parts.push("(Decaf)".to_string());
    }
    if order.iced {
        parts.push("(Iced)".to_string());
    }
    if order.sugars > 0 {
        parts.push(format!("{}x sugar", order.sugars));
    }
    if order.milks > 0 {
        parts.push(format!("{}x milk", order.milks));
    }
    if !order.notes.is_empty() {
        parts.push(format!("[{}]", order.notes));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CupSize, DrinkType};

    #[test]
    fn skips_people_without_orders() {
        let mut abdul = Person::new("Abdul").unwrap();
        let doug = Person::new("Doug").unwrap();
        abdul.last_order = Some(
            Order::new()
                .with_drink(DrinkType::Espresso)
                .with_size(CupSize::Small)
                .with_decaf(true)
                .with_milks(2),
        );

        let text = roster_share_text(&[abdul, doug]);
        assert_eq!(text, "Tim Hortons Run\nAbdul: Small Espresso (Decaf) 2x milk");
    }

    #[test]
    fn empty_roster_is_just_the_title() {
        assert_eq!(roster_share_text(&[]), SHARE_TITLE);
    }
}
