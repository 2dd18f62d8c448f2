// SPDX-License-Identifier: GPL-3.0-only

//! Resolution dialog view

use super::{DialogMessage, PickerKind, ResolutionDialog};
use crate::constants::{app_info, ui};
use crate::settings::SettingsStore;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

/// Card background for the dialog, slightly rounded at most
fn dialog_card_style(theme: &cosmic::Theme) -> widget::container::Style {
    let cosmic = theme.cosmic();
    let bg = cosmic.bg_color();
    widget::container::Style {
        background: Some(Background::Color(Color::from_rgb(bg.red, bg.green, bg.blue))),
        border: cosmic::iced::Border {
            radius: cosmic.corner_radii.radius_s.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the dialog card
fn backdrop_style(_theme: &cosmic::Theme) -> widget::container::Style {
    widget::container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            ui::BACKDROP_ALPHA,
        ))),
        ..Default::default()
    }
}

impl<S: SettingsStore> ResolutionDialog<S> {
    /// Build the modal dialog
    ///
    /// Shows the three sections, or the inner picker when one is open.
    /// Clicking the backdrop closes the inner picker first, then the dialog.
    pub fn view(&self) -> Element<'_, DialogMessage> {
        let spacing = cosmic::theme::spacing();

        let (content, backdrop_message) = match self.active_picker() {
            Some(kind) => (self.picker_view(kind), DialogMessage::ClosePicker),
            None => (self.sections_view(), DialogMessage::Dismiss),
        };

        // Swallow clicks on the card so they don't reach the backdrop
        let card = widget::mouse_area(
            widget::container(content)
                .padding(spacing.space_m)
                .style(dialog_card_style)
                .width(Length::Fixed(ui::DIALOG_WIDTH)),
        )
        .on_press(DialogMessage::Noop);

        widget::mouse_area(
            widget::container(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(backdrop_style),
        )
        .on_press(backdrop_message)
        .into()
    }

    fn sections_view(&self) -> Element<'_, DialogMessage> {
        let spacing = cosmic::theme::spacing();

        let mut column = widget::column()
            .push(
                widget::text(self.facing().title())
                    .size(20)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_s));

        for kind in PickerKind::ALL {
            let value = self.label(kind).unwrap_or("None available");

            let section = widget::column()
                .push(
                    widget::text(kind.title())
                        .size(ui::SECTION_TITLE_TEXT_SIZE)
                        .font(cosmic::font::bold()),
                )
                .push(widget::text(value).size(ui::VALUE_TEXT_SIZE))
                .spacing(spacing.space_xxxs);

            let mut button = widget::button::custom(section)
                .class(cosmic::theme::Button::Text)
                .width(Length::Fill);
            if !self.items(kind).is_empty() {
                button = button.on_press(DialogMessage::OpenPicker(kind));
            }

            column = column
                .push(button)
                .push(widget::vertical_space().height(spacing.space_xxs));
        }

        let version_info = if app_info::is_flatpak() {
            format!("Version {} (Flatpak)", app_info::version())
        } else {
            format!("Version {}", app_info::version())
        };

        let actions = widget::row()
            .push(
                widget::text(version_info)
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(widget::button::suggested("OK").on_press(DialogMessage::Confirm))
            .align_y(Alignment::Center);

        column
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(actions)
            .spacing(0)
            .into()
    }

    fn picker_view(&self, kind: PickerKind) -> Element<'_, DialogMessage> {
        let spacing = cosmic::theme::spacing();
        let selected = self.selected_index(kind);

        let mut list = widget::column().spacing(spacing.space_xxxs);
        for item in self.items(kind) {
            // Use Suggested for selected, Text for unselected - COSMIC's native button highlighting
            let button = widget::button::custom(widget::text(item.label.as_str()))
                .on_press(DialogMessage::Select(kind, item.index))
                .class(if item.index == selected {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Text
                })
                .width(Length::Fill);
            list = list.push(button);
        }

        widget::column()
            .push(
                widget::text(kind.title())
                    .size(ui::SECTION_TITLE_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(
                widget::container(widget::scrollable(list))
                    .max_height(ui::PICKER_MAX_HEIGHT),
            )
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(widget::Space::new(Length::Fill, Length::Shrink))
                    .push(
                        widget::button::standard("Cancel").on_press(DialogMessage::ClosePicker),
                    ),
            )
            .spacing(0)
            .into()
    }
}
