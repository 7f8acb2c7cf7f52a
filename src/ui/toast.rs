// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small kind-colored cards with an optional dismiss button and a
//! remaining-time progress strip.

use crate::notifications::{Message, Notification};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

/// Kind palette after applying the per-notification override.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CardColors {
    background: Color,
    text: Color,
    border: Color,
}

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `now` should be the provider's last tick so the progress strip and
    /// exit fade stay in step with the tick cadence.
    pub fn view(notification: &Notification, now: Instant) -> Element<'_, Message> {
        let colors = card_colors(notification, now);
        let notification_id = notification.id();

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(colors.text),
            });

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.show_close() {
            let close_button = button(
                Text::new("\u{00D7}")
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| iced::widget::text::Style {
                        color: Some(colors.text),
                    }),
            )
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(close_button_style);
            content = content.push(close_button);
        }

        let mut card = Column::new().push(content);
        if let Some(progress) = notification.progress(now) {
            card = card.push(progress_strip(progress, colors.text));
        }

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| card_container_style(colors))
            .into()
    }
}

/// Resolves the card's colors: kind palette, then the per-notification
/// override, then the exit fade.
fn card_colors(notification: &Notification, now: Instant) -> CardColors {
    let kind = notification.kind();
    let override_ = notification.style().unwrap_or_default();
    let alpha = notification.opacity(now);

    CardColors {
        background: faded(override_.background.unwrap_or_else(|| kind.background()), alpha),
        text: faded(override_.text.unwrap_or_else(|| kind.text()), alpha),
        border: faded(override_.border.unwrap_or_else(|| kind.border()), alpha),
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Width of the progress strip for a remaining-time fraction.
fn strip_width(progress: f32) -> f32 {
    (sizing::TOAST_WIDTH - 2.0 * spacing::SM) * progress.clamp(0.0, 1.0)
}

fn progress_strip(progress: f32, text_color: Color) -> Element<'static, Message> {
    let strip_color = Color {
        a: text_color.a * opacity::PROGRESS_STRIP,
        ..text_color
    };

    Container::new(
        Space::new()
            .width(Length::Fixed(strip_width(progress)))
            .height(Length::Fixed(sizing::TOAST_PROGRESS_HEIGHT)),
    )
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(strip_color)),
        ..Default::default()
    })
    .into()
}

/// Style function for the card container.
fn card_container_style(colors: CardColors) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors.background)),
        border: iced::Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{AutoDismiss, Kind, Options, Provider, StyleOverride};

    fn sample(options: Options) -> Notification {
        let mut provider = Provider::default();
        let id = provider.create(options);
        provider.get(id).unwrap().clone()
    }

    #[test]
    fn card_container_style_uses_resolved_colors() {
        let colors = CardColors {
            background: palette::toast::SUCCESS_BG,
            text: palette::toast::SUCCESS_TEXT,
            border: palette::toast::SUCCESS_BORDER,
        };
        let style = card_container_style(colors);

        assert_eq!(style.border.color, palette::toast::SUCCESS_BORDER);
        assert_eq!(style.text_color, Some(palette::toast::SUCCESS_TEXT));
        assert!(style.background.is_some());
    }

    #[test]
    fn style_override_replaces_kind_palette() {
        let n = sample(
            Options::new().kind(Kind::Info).style(StyleOverride {
                background: Some(Color::WHITE),
                text: None,
                border: None,
            }),
        );
        let colors = card_colors(&n, n.created_at());
        assert_eq!(colors.background, Color::WHITE);
        assert_eq!(colors.text, palette::toast::INFO_TEXT);
    }

    #[test]
    fn exiting_card_fades_its_colors() {
        let mut provider = Provider::default();
        let id = provider.create(Options::new());
        provider.dismiss(id);
        let n = provider.get(id).unwrap().clone();

        let later = Instant::now() + std::time::Duration::from_millis(125);
        let colors = card_colors(&n, later);
        assert!(colors.background.a < 1.0);
    }

    #[test]
    fn strip_width_tracks_remaining_fraction() {
        assert_eq!(strip_width(0.0), 0.0);
        assert_eq!(strip_width(1.0), sizing::TOAST_WIDTH - 2.0 * spacing::SM);
        assert!(strip_width(0.5) < strip_width(0.75));
        // Out-of-range fractions are clamped.
        assert_eq!(strip_width(2.0), strip_width(1.0));
    }

    #[test]
    fn view_builds_for_every_kind() {
        for kind in Kind::ALL {
            let n = sample(
                Options::new()
                    .kind(kind)
                    .duration(AutoDismiss::after_millis(1000)),
            );
            let _ = Toast::view(&n, n.created_at());
        }
    }

    #[test]
    fn view_builds_without_close_button_or_progress() {
        let n = sample(Options::new().persistent().show_close(false));
        let _ = Toast::view(&n, n.created_at());
    }
}
