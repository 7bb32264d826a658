//! List parsing
//!
//! Grammar, for each depth `d` up to the dialect's maximum:
//!
//! ```text
//! List(d) := Item(d)+
//! Item(d) := Bullet(d) Inline* List(>d)?
//! ```
//!
//! A nested list binds to the item right before it and fills only that
//! item's `nested` slot. Where a list may start, any depth at or below the
//! expected one is accepted, so a bullet with no parent item still forms a
//! list instead of failing the parse.
//!
//! Top-level lists are split by marker kind: a bulleted run followed by a
//! numbered run makes two lists. Nested lists take their kind from their first
//! bullet and accept both markers after it.

use chumsky::prelude::*;

use crate::ast::{Inline, List, ListItem};
use crate::lexer::{Token, TokenKind};
use crate::parser::combinators::{extend_span, first_of, flatten, kind, Boxed, ParserError};

/// Build the list parser for lists up to `max_depth` levels deep
pub(crate) fn list<P>(inline: P, max_depth: u8) -> Boxed<List>
where
    P: Parser<Token, Vec<Inline>, Error = ParserError> + Clone + 'static,
{
    // Shallowest level first, built from the deepest up
    let mut levels: Vec<Boxed<List>> = Vec::new();
    for depth in (1..=max_depth).rev() {
        let nested = first_of(&levels);
        levels.insert(0, list_at(depth, inline.clone(), nested));
    }
    match first_of(&levels) {
        Some(parser) => parser,
        None => list_at(1, inline, None),
    }
}

/// A list whose items all sit at exactly `depth`
fn list_at<P>(depth: u8, inline: P, nested: Option<Boxed<List>>) -> Boxed<List>
where
    P: Parser<Token, Vec<Inline>, Error = ParserError> + Clone + 'static,
{
    let nested: Boxed<Option<List>> = match nested {
        Some(parser) => parser.or_not().boxed(),
        None => empty().to(None).boxed(),
    };

    let item = move |wanted: Option<bool>| {
        kind(move |k| {
            matches!(k, TokenKind::Bullet { ordered, depth: d }
                if *d == depth && wanted.map_or(true, |w| w == *ordered))
        })
        .then(inline.clone().repeated().map(flatten))
        .then(nested.clone())
        .map_with_span(|((bullet, content), nested), span| {
            let ordered = matches!(bullet.kind, TokenKind::Bullet { ordered: true, .. });
            let mut item = ListItem::new(content).at(extend_span(&bullet.span, &span));
            item.nested = nested;
            (ordered, item)
        })
    };

    if depth == 1 {
        let of_kind = |ordered: bool| {
            item(Some(ordered))
                .repeated()
                .at_least(1)
                .map_with_span(move |items: Vec<(bool, ListItem)>, span| {
                    let items = items.into_iter().map(|(_, item)| item).collect();
                    List::new(ordered, items).at(span)
                })
        };
        of_kind(false).or(of_kind(true)).boxed()
    } else {
        item(None)
            .repeated()
            .at_least(1)
            .map_with_span(|items: Vec<(bool, ListItem)>, span| {
                let ordered = items.first().is_some_and(|(ordered, _)| *ordered);
                let items = items.into_iter().map(|(_, item)| item).collect();
                List::new(ordered, items).at(span)
            })
            .boxed()
    }
}
