//! Name search over password cards
//!
//! Matching is a case-insensitive substring test against the card name only;
//! URL, username and password never participate.

use crate::models::PasswordCard;

/// Cards whose name contains `term`, ignoring case, in input order.
///
/// An empty term returns every card unchanged.
#[must_use]
pub fn filter(records: &[PasswordCard], term: &str) -> Vec<PasswordCard> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|card| name_matches(card, &needle))
        .cloned()
        .collect()
}

/// Whether `card` matches `term` under the same rule as [`filter`].
#[must_use]
pub fn matches(card: &PasswordCard, term: &str) -> bool {
    term.is_empty() || name_matches(card, &term.to_lowercase())
}

fn name_matches(card: &PasswordCard, lowercase_term: &str) -> bool {
    card.name.to_lowercase().contains(lowercase_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardDraft, CardId};
    use pretty_assertions::assert_eq;

    fn card(id: &str, name: &str) -> PasswordCard {
        PasswordCard::from_draft(
            CardId::new(id),
            CardDraft::new(name, "bank.com", "bank-user", "bank-pass"),
        )
    }

    fn names(cards: &[PasswordCard]) -> Vec<&str> {
        cards.iter().map(|card| card.name.as_str()).collect()
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let cards = vec![card("2", "Mail"), card("1", "Bank"), card("3", "Chat")];
        assert_eq!(filter(&cards, ""), cards);
    }

    #[test]
    fn match_ignores_case() {
        let cards = vec![card("1", "Bank"), card("2", "MyBANKING"), card("3", "Mail")];
        assert_eq!(names(&filter(&cards, "bAnK")), vec!["Bank", "MyBANKING"]);
        assert_eq!(names(&filter(&cards, "x")), Vec::<&str>::new());
    }

    #[test]
    fn only_the_name_is_searched() {
        let cards = vec![card("1", "Mail")];
        assert!(filter(&cards, "bank").is_empty());
        assert!(!matches(&cards[0], "bank"));
        assert!(matches(&cards[0], "AI"));
    }

    #[test]
    fn filter_agrees_with_lowercase_containment() {
        let cards = vec![
            card("1", "Bank"),
            card("2", "Ünïcode Vault"),
            card("3", "bankroll"),
            card("4", ""),
        ];
        for term in ["", "b", "BANK", "vault", "ÜNÏ", "zz"] {
            let expected = cards
                .iter()
                .filter(|card| card.name.to_lowercase().contains(&term.to_lowercase()))
                .cloned()
                .collect::<Vec<_>>();
            assert_eq!(filter(&cards, term), expected, "term {term:?}");
        }
    }
}
