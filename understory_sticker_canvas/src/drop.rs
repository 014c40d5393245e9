// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of drag‑and‑drop payloads.
//!
//! A drop carries one or more payloads, each tagged with a content kind. A
//! URL replaces the background and takes priority over everything else;
//! otherwise the first piece of text is placed as a new item at the drop
//! point. Anything else is not handled.
//!
//! Payload values may arrive asynchronously and out of order. A
//! [`PendingDrop`] collects them; routing only looks at the payloads that
//! have resolved by the time it runs.

use alloc::string::String;

use kurbo::Point;
use smallvec::SmallVec;

use crate::document::ItemId;

/// Content kind of a drop payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// A URL, typically of an image.
    Url,
    /// Plain text, placed as a symbol.
    Text,
    /// Anything the canvas does not understand.
    Other,
}

impl PayloadKind {
    /// Returns `true` for kinds the router can act on.
    #[must_use]
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A resolved drop payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropPayload {
    /// Content kind.
    pub kind: PayloadKind,
    /// Resolved value: the URL or the text.
    pub value: String,
}

impl DropPayload {
    /// A URL payload.
    pub fn url(value: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Url,
            value: value.into(),
        }
    }

    /// A text payload.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Text,
            value: value.into(),
        }
    }
}

/// What a drop should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropAction<'a> {
    /// Set the background source to this URL.
    ReplaceBackground(&'a str),
    /// Place this text as a new item.
    PlaceText(&'a str),
}

/// Result of dispatching a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// A URL payload became the new background source. The host should
    /// start loading it.
    BackgroundReplaced,
    /// A URL payload named the current background source, which is already
    /// loaded or loading. Nothing changed and no load is needed.
    BackgroundUnchanged,
    /// A text payload was placed as a new item.
    ItemPlaced(ItemId),
    /// No payload could be used; nothing changed.
    NotHandled,
}

impl DropOutcome {
    /// Returns `true` unless the outcome is [`DropOutcome::NotHandled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::NotHandled)
    }

    /// Returns `true` if the host should start loading the background source.
    #[must_use]
    pub fn needs_load(self) -> bool {
        matches!(self, Self::BackgroundReplaced)
    }
}

/// Picks the action for a set of resolved payloads.
#[must_use]
pub fn route(payloads: &[DropPayload]) -> Option<DropAction<'_>> {
    route_resolved(payloads.iter().map(|p| (p.kind, p.value.as_str())))
}

fn route_resolved<'a>(
    payloads: impl Iterator<Item = (PayloadKind, &'a str)>,
) -> Option<DropAction<'a>> {
    let mut first_text = None;
    for (kind, value) in payloads {
        match kind {
            PayloadKind::Url => return Some(DropAction::ReplaceBackground(value)),
            PayloadKind::Text if first_text.is_none() => first_text = Some(value),
            PayloadKind::Text | PayloadKind::Other => {}
        }
    }
    first_text.map(DropAction::PlaceText)
}

#[derive(Clone, Debug)]
struct Slot {
    kind: PayloadKind,
    value: Option<String>,
}

/// A drop whose payload values are still being resolved.
///
/// The document‑space location is captured when the drop happens, so later
/// pan or zoom changes do not move where the item lands.
#[derive(Clone, Debug)]
pub struct PendingDrop {
    location: Point,
    slots: SmallVec<[Slot; 2]>,
}

impl PendingDrop {
    /// Creates a pending drop, or `None` if no payload kind is supported.
    pub(crate) fn new(
        kinds: impl IntoIterator<Item = PayloadKind>,
        location: Point,
    ) -> Option<Self> {
        let slots: SmallVec<[Slot; 2]> = kinds
            .into_iter()
            .map(|kind| Slot { kind, value: None })
            .collect();
        if !slots.iter().any(|slot| slot.kind.is_supported()) {
            return None;
        }
        Some(Self { location, slots })
    }

    /// Drop location in document space.
    #[must_use]
    pub fn location(&self) -> Point {
        self.location
    }

    /// Number of payloads in the drop.
    #[must_use]
    pub fn payload_count(&self) -> usize {
        self.slots.len()
    }

    /// Kind of the payload at `index`.
    #[must_use]
    pub fn kind(&self, index: usize) -> Option<PayloadKind> {
        self.slots.get(index).map(|slot| slot.kind)
    }

    /// Stores the resolved value of the payload at `index`.
    ///
    /// Returns `false` (and changes nothing) if the index is out of range or
    /// the payload was already resolved, so duplicate callbacks are harmless.
    pub fn resolve(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.value.is_none() => {
                slot.value = Some(value.into());
                true
            }
            _ => {
                tracing::trace!(index, "ignored duplicate or unknown payload resolution");
                false
            }
        }
    }

    /// Returns `true` once every payload has a value.
    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        self.slots.iter().all(|slot| slot.value.is_some())
    }

    /// Picks the action using only the payloads resolved so far.
    #[must_use]
    pub fn route(&self) -> Option<DropAction<'_>> {
        route_resolved(
            self.slots
                .iter()
                .filter_map(|slot| Some((slot.kind, slot.value.as_deref()?))),
        )
    }
}
