//! Preset themes for lst
//!
//! Each preset is built from a color palette and a unique name.

use crate::config::Theme;
use crate::config::theme::{Palette, make_theme};

const GRUV_DARK: Palette = Palette {
    directory: (131, 165, 152),
    executable: (184, 187, 38),
    symlink: (142, 192, 124),
    error: (251, 73, 52),
    muted: (146, 131, 116),
    accent: (211, 134, 155),
    text: (235, 219, 178),
};

const GRUV_LIGHT: Palette = Palette {
    directory: (7, 102, 120),
    executable: (121, 116, 14),
    symlink: (66, 123, 88),
    error: (157, 0, 6),
    muted: (124, 111, 100),
    accent: (143, 63, 113),
    text: (60, 56, 54),
};

pub(crate) fn gruvbox_dark() -> Theme {
    make_theme("gruvbox-dark", GRUV_DARK)
}
pub(crate) fn gruvbox_light() -> Theme {
    make_theme("gruvbox-light", GRUV_LIGHT)
}

const MOCHA: Palette = Palette {
    directory: (137, 180, 250),
    executable: (166, 227, 161),
    symlink: (148, 226, 213),
    error: (243, 139, 168),
    muted: (108, 112, 134),
    accent: (203, 166, 247),
    text: (205, 214, 244),
};

const LATTE: Palette = Palette {
    directory: (30, 102, 245),
    executable: (64, 160, 43),
    symlink: (23, 146, 153),
    error: (210, 15, 57),
    muted: (156, 160, 176),
    accent: (136, 57, 239),
    text: (76, 79, 105),
};

pub(crate) fn catppuccin_mocha() -> Theme {
    make_theme("catppuccin-mocha", MOCHA)
}
pub(crate) fn catppuccin_latte() -> Theme {
    make_theme("catppuccin-latte", LATTE)
}

const NORD: Palette = Palette {
    directory: (129, 161, 193),
    executable: (163, 190, 140),
    symlink: (136, 192, 208),
    error: (191, 97, 106),
    muted: (76, 86, 106),
    accent: (180, 142, 173),
    text: (216, 222, 233),
};

pub(crate) fn nord() -> Theme {
    make_theme("nord", NORD)
}

const TOKYO_NIGHT: Palette = Palette {
    directory: (122, 162, 247),
    executable: (158, 206, 106),
    symlink: (125, 207, 255),
    error: (247, 118, 142),
    muted: (86, 95, 137),
    accent: (187, 154, 247),
    text: (192, 202, 245),
};

pub(crate) fn tokyonight_night() -> Theme {
    make_theme("tokyonight-night", TOKYO_NIGHT)
}

const DRACULA: Palette = Palette {
    directory: (189, 147, 249),
    executable: (80, 250, 123),
    symlink: (139, 233, 253),
    error: (255, 85, 85),
    muted: (98, 114, 164),
    accent: (255, 121, 198),
    text: (248, 248, 242),
};

pub(crate) fn dracula() -> Theme {
    make_theme("dracula", DRACULA)
}

const SOLARIZED_DARK: Palette = Palette {
    directory: (38, 139, 210),
    executable: (133, 153, 0),
    symlink: (42, 161, 152),
    error: (220, 50, 47),
    muted: (88, 110, 117),
    accent: (211, 54, 130),
    text: (147, 161, 161),
};

pub(crate) fn solarized_dark() -> Theme {
    make_theme("solarized-dark", SOLARIZED_DARK)
}
