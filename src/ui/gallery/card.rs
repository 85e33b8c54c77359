// SPDX-License-Identifier: MPL-2.0
//! One grid card: thumbnail with overlays, name and creation date.

use super::component::{Message, Thumbnail};
use super::layout::GridLayout;
use crate::domain::library::{format_duration, VideoAsset};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Local};
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{button, container, image, Column, Container, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Pixels};
use std::fmt::Write;
use std::time::SystemTime;

/// Pattern used when the localized date pattern is not a valid strftime string.
const FALLBACK_DATE_PATTERN: &str = "%Y-%m-%d";

/// Formats a creation time in the local timezone.
#[must_use]
pub fn format_created(created: SystemTime, pattern: &str) -> String {
    let local: DateTime<Local> = created.into();
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", local.format(FALLBACK_DATE_PATTERN));
    }
    out
}

pub fn view<'a>(
    index: usize,
    asset: &'a VideoAsset,
    thumbnail: Option<&'a Thumbnail>,
    layout: GridLayout,
    i18n: &I18n,
) -> Element<'a, Message> {
    let thumbnail_height = layout.thumbnail_height();

    let picture: Element<'a, Message> = match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    let scrim = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::thumbnail_scrim);

    let play_disc = Container::new(
        Container::new(Text::new("▶").size(typography::BODY_LG))
            .center(Length::Fixed(sizing::PLAY_DISC))
            .style(styles::container::play_disc),
    )
    .center(Length::Fill);

    let badge = Container::new(
        Container::new(
            Text::new(format_duration(asset.duration_secs)).size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom);

    let artwork = Stack::new()
        .push(picture)
        .push(scrim)
        .push(play_disc)
        .push(badge)
        .width(Length::Fill)
        .height(Length::Fixed(thumbnail_height));

    let fallback = i18n.tr("untitled-video");
    let title = Container::new(
        Text::new(asset.display_name_or(&fallback).to_string())
            .size(typography::BODY)
            .line_height(LineHeight::Absolute(Pixels(typography::CARD_TITLE_LINE)))
            .wrapping(Wrapping::WordOrGlyph),
    )
    .max_height(typography::CARD_TITLE_LINE * 2.0)
    .clip(true);

    let date = Text::new(format_created(asset.created_at, &i18n.tr("date-format")))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let info = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::CARD_PADDING)
        .push(title)
        .push(date);

    let body = Container::new(Column::new().push(artwork).push(info))
        .width(Length::Fill)
        .style(styles::container::card)
        .clip(true);

    button(body)
        .padding(0)
        .width(Length::Fixed(layout.card_width()))
        .style(styles::button::card)
        .on_press(Message::Select(index))
        .into()
}

/// Empty cell that keeps the last row aligned when the count is odd.
pub fn filler<'a>(layout: GridLayout) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(layout.card_width()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // 2024-07-01T12:00:00Z, far enough from midnight for any timezone.
    const MID_2024: u64 = 1_719_835_200;

    #[test]
    fn formats_with_localized_pattern() {
        let created = SystemTime::UNIX_EPOCH + Duration::from_secs(MID_2024);
        assert_eq!(format_created(created, "%Y"), "2024");
        assert_eq!(format_created(created, "%m/%Y"), "07/2024");
    }

    #[test]
    fn invalid_pattern_falls_back_to_iso_date() {
        let created = SystemTime::UNIX_EPOCH + Duration::from_secs(MID_2024);
        let formatted = format_created(created, "%Q");
        assert!(formatted.starts_with("2024-07-0"), "got {formatted}");
    }
}
