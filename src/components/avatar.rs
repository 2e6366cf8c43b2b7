use gpui::{
    AnyElement, ImageSource, IntoElement, ParentElement, Pixels, RenderOnce, SharedString,
    StyleRefinement, Styled, div, img, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    style::{StyledExt, ThemedStyle},
    theme::{ColorKind, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeTokens, TokenError},
};

/// The supported avatar dimensions, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    S18,
    S24,
    S32,
    #[default]
    S40,
}

impl AvatarSize {
    pub const ALL: [AvatarSize; 4] = [
        AvatarSize::S18,
        AvatarSize::S24,
        AvatarSize::S32,
        AvatarSize::S40,
    ];

    pub fn dimension(&self) -> Pixels {
        match self {
            AvatarSize::S18 => px(18.),
            AvatarSize::S24 => px(24.),
            AvatarSize::S32 => px(32.),
            AvatarSize::S40 => px(40.),
        }
    }

    pub fn font_size(&self) -> Pixels {
        match self {
            AvatarSize::S18 => px(10.),
            AvatarSize::S24 => px(12.),
            AvatarSize::S32 => px(14.),
            AvatarSize::S40 => px(16.),
        }
    }
}

impl TryFrom<u32> for AvatarSize {
    type Error = TokenError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            18 => Ok(AvatarSize::S18),
            24 => Ok(AvatarSize::S24),
            32 => Ok(AvatarSize::S32),
            40 => Ok(AvatarSize::S40),
            value => Err(TokenError::UnsupportedSize {
                token: "avatar",
                value,
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarVariant {
    #[default]
    Circular,
    Rounded,
    Square,
}

impl AvatarVariant {
    pub const ALL: [AvatarVariant; 3] = [
        AvatarVariant::Circular,
        AvatarVariant::Rounded,
        AvatarVariant::Square,
    ];
}

enum AvatarContent {
    Empty,
    Initials(SharedString),
    Image(ImageSource),
}

/// A fixed-size avatar showing an image, initials, or arbitrary children.
#[derive(IntoElement)]
pub struct Avatar {
    size: AvatarSize,
    variant: AvatarVariant,
    color: ColorKind,
    content: AvatarContent,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            size: AvatarSize::default(),
            variant: AvatarVariant::default(),
            color: ColorKind::Secondary,
            content: AvatarContent::Empty,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: AvatarVariant) -> Self {
        self.variant = variant;
        self
    }

    /// The palette role used for the fallback background.
    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn initials(mut self, initials: impl Into<SharedString>) -> Self {
        self.content = AvatarContent::Initials(initials.into());
        self
    }

    pub fn src(mut self, source: impl Into<ImageSource>) -> Self {
        self.content = AvatarContent::Image(source.into());
        self
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemedStyle for Avatar {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let dimension = self.size.dimension();
        let palette = self.color.resolve(tokens);

        let style = StyleRefinement::default()
            .size(dimension)
            .min_w(dimension)
            .min_h(dimension)
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .overflow_hidden()
            .font_family(tokens.layout().text.default_font.primary_family())
            .text_size(self.size.font_size())
            .text_color(palette.contrast_text)
            .bg(palette.main);

        match self.variant {
            AvatarVariant::Circular => style.rounded_full(),
            AvatarVariant::Rounded => style.rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(tokens)),
            AvatarVariant::Square => style.rounded_none(),
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let style = self.resolve_style(&cx.theme_tokens());

        div()
            .refine_style(&style)
            .map(|this| match self.content {
                AvatarContent::Empty => this,
                AvatarContent::Initials(initials) => this.child(initials),
                AvatarContent::Image(source) => this.child(img(source).size_full()),
            })
            .children(self.children)
    }
}

impl ParentElement for Avatar {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Avatar {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}
