use gpui::{
    App, AppContext, Application, Bounds, Context, TitlebarOptions, Window, WindowBounds,
    WindowOptions, div, point, prelude::*, px, size,
};
use tracing_subscriber::EnvFilter;

use gpui_mosaic::{
    MosaicAssets, MosaicIconKind, assets,
    components::{
        Alert, AlertSeverity, AlertVariant, Avatar, AvatarSize, AvatarVariant, Badge,
        BadgeVariant, Button, ButtonSize, ButtonVariant, Checkbox, Chip, ChipVariant, Divider,
        DividerVariant, Icon, IconColor, LinearProgress, List, ListItem, ProgressVariant,
        Typography,
    },
    theme::{ColorKind, Theme, ThemeExt, ThemeVariantKind, TypographyKind},
};

struct Gallery {
    checked: bool,
    selected_row: usize,
    progress: f32,
    show_alert: bool,
    dark: bool,
}

impl Gallery {
    fn section(title: &'static str) -> impl IntoElement {
        Typography::new(title)
            .variant(TypographyKind::Overline)
            .gutter_bottom(true)
    }
}

impl Render for Gallery {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_mosaic::init_for_window(window, cx);

        let background = cx.theme_tokens().colors().background.default;

        div()
            .id("gallery")
            .size_full()
            .overflow_y_scroll()
            .bg(background)
            .flex()
            .flex_col()
            .gap(px(16.))
            .p(px(32.))
            .child(
                Typography::new("Mosaic components")
                    .variant(TypographyKind::H4)
                    .gutter_bottom(true),
            )
            .child(Self::section("Buttons"))
            .child(
                div()
                    .flex()
                    .gap(px(12.))
                    .items_center()
                    .child(
                        Button::new("contained")
                            .text("Toggle theme")
                            .on_click(cx.listener(|view, _, _window, cx| {
                                view.dark = !view.dark;
                                cx.set_theme_variant(if view.dark {
                                    ThemeVariantKind::Dark
                                } else {
                                    ThemeVariantKind::Light
                                });
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("outlined")
                            .text("Advance")
                            .variant(ButtonVariant::Outlined)
                            .size(ButtonSize::Small)
                            .end_icon(MosaicIconKind::CheckCircle)
                            .on_click(cx.listener(|view, _, _window, cx| {
                                view.progress = (view.progress + 12.5) % 112.5;
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("text")
                            .text("Show alert")
                            .variant(ButtonVariant::Text)
                            .color(ColorKind::Secondary)
                            .disabled(self.show_alert)
                            .on_click(cx.listener(|view, _, _window, cx| {
                                view.show_alert = true;
                                cx.notify();
                            })),
                    ),
            )
            .child(Self::section("Alerts"))
            .when(self.show_alert, |this| {
                this.child(
                    Alert::new("closable")
                        .severity(AlertSeverity::Warning)
                        .title("Heads up")
                        .child("This alert can be dismissed.")
                        .on_close(cx.listener(|view, _, _window, cx| {
                            view.show_alert = false;
                            cx.notify();
                        })),
                )
            })
            .children(
                AlertSeverity::ALL
                    .into_iter()
                    .zip(AlertVariant::ALL.into_iter().cycle())
                    .enumerate()
                    .map(|(ix, (severity, variant))| {
                        Alert::new(("alert", ix))
                            .severity(severity)
                            .variant(variant)
                            .child(format!("{severity:?} alert, {variant:?} variant"))
                    }),
            )
            .child(Self::section("Progress"))
            .child(
                LinearProgress::new("determinate")
                    .variant(ProgressVariant::Determinate)
                    .value(self.progress)
                    .show_label(true),
            )
            .child(LinearProgress::new("indeterminate").color(ColorKind::Secondary))
            .child(Self::section("Avatars, chips and badges"))
            .child(
                div()
                    .flex()
                    .gap(px(16.))
                    .items_center()
                    .child(Avatar::new().initials("MO"))
                    .child(
                        Avatar::new()
                            .size(AvatarSize::S32)
                            .variant(AvatarVariant::Rounded)
                            .color(ColorKind::Success)
                            .initials("R"),
                    )
                    .child(
                        Badge::new()
                            .content(120)
                            .color(ColorKind::Error)
                            .child(Icon::glyph("mail").color(IconColor::Action)),
                    )
                    .child(
                        Badge::new()
                            .variant(BadgeVariant::Dot)
                            .child(Icon::new(MosaicIconKind::Info)),
                    )
                    .child(
                        Chip::new("chip-avatar")
                            .label("Deletable")
                            .avatar(Avatar::new().initials("D"))
                            .on_delete(|_, _, _| tracing::info!("chip deleted")),
                    )
                    .child(
                        Chip::new("chip-outlined")
                            .label("Clickable")
                            .variant(ChipVariant::Outlined)
                            .color(ColorKind::Primary)
                            .on_click(|_, _, _| tracing::info!("chip clicked")),
                    ),
            )
            .child(Self::section("Lists"))
            .child(
                List::new()
                    .subheader("Folders")
                    .children((0..3).map(|ix| {
                        ListItem::new(("row", ix))
                            .button(true)
                            .selected(self.selected_row == ix)
                            .primary(format!("Folder {ix}"))
                            .secondary("Updated recently")
                            .divider(ix < 2)
                            .on_click(cx.listener(move |view, _, _window, cx| {
                                view.selected_row = ix;
                                cx.notify();
                            }))
                    })),
            )
            .child(Divider::new().variant(DividerVariant::Middle))
            .child(
                div()
                    .flex()
                    .gap(px(8.))
                    .items_center()
                    .child(
                        Checkbox::new("checkbox")
                            .checked(self.checked)
                            .on_click(cx.listener(|view, checked, _window, cx| {
                                view.checked = *checked;
                                cx.notify();
                            })),
                    )
                    .child(Typography::new("Remember me")),
            )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new()
        .with_assets(assets![MosaicAssets])
        .run(|cx: &mut App| {
            gpui_mosaic::init(cx);
            cx.set_theme(Theme::DEFAULT);

            let bounds = Bounds::centered(None, size(px(720.), px(900.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|_cx| Gallery {
                        checked: false,
                        selected_row: 0,
                        progress: 37.5,
                        show_alert: true,
                        dark: false,
                    })
                },
            )
            .unwrap();

            cx.activate(true);
        });
}
