// SPDX-License-Identifier: MPL-2.0
//! Overlay rendering for the active notifications.
//!
//! Groups records by their screen anchor and renders one fixed-position
//! stack per distinct anchor, preserving insertion order within each
//! group. The resulting element is meant to be layered over the
//! application content with [`iced::widget::Stack`].

use crate::notifications::{Message, Notification, Position, Provider};
use crate::ui::design_tokens::spacing;
use crate::ui::toast::Toast;
use iced::widget::{text, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Groups the provider's active notifications by position, preserving
/// insertion order within each group. Empty positions are omitted.
pub fn grouped(provider: &Provider) -> Vec<(Position, Vec<&Notification>)> {
    Position::ALL
        .iter()
        .filter_map(|&position| {
            let stack: Vec<&Notification> = provider
                .notifications()
                .filter(|n| n.position() == position)
                .collect();
            if stack.is_empty() {
                None
            } else {
                Some((position, stack))
            }
        })
        .collect()
}

/// Renders the toast overlay with one anchored stack per distinct
/// position.
pub fn view(provider: &Provider) -> Element<'_, Message> {
    let groups = grouped(provider);

    if groups.is_empty() {
        // Return an empty container that takes no space.
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let now = provider.last_tick();
    let layers: Vec<Element<'_, Message>> = groups
        .into_iter()
        .map(|(position, stack)| {
            let toasts: Vec<Element<'_, Message>> =
                stack.into_iter().map(|n| Toast::view(n, now)).collect();

            let column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(horizontal_alignment(position));

            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal_alignment(position))
                .align_y(vertical_alignment(position))
                .padding(spacing::MD)
                .into()
        })
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn horizontal_alignment(position: Position) -> alignment::Horizontal {
    match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    }
}

fn vertical_alignment(position: Position) -> alignment::Vertical {
    match position {
        Position::TopLeft | Position::TopCenter | Position::TopRight => {
            alignment::Vertical::Top
        }
        Position::BottomLeft | Position::BottomCenter | Position::BottomRight => {
            alignment::Vertical::Bottom
        }
    }
}
