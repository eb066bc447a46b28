use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as CellColor;
use crossterm::style::Color;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

impl ColorMode {
  /// `Auto` colors only when stdout is a terminal.
  pub fn enabled(self) -> bool {
    match self {
      ColorMode::Always => true,
      ColorMode::Never => false,
      ColorMode::Auto => std::io::stdout().is_terminal(),
    }
  }
}

/// Terminal background the palette is picked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
  Auto,
  Dark,
  Light,
}

impl Theme {
  /// Replaces `Auto` with a guess from `COLORFGBG`.
  pub fn resolve(self) -> Theme {
    match self {
      Theme::Auto => background_theme(std::env::var("COLORFGBG").ok().as_deref()),
      theme => theme,
    }
  }
}

// COLORFGBG is "fg;bg"; backgrounds 8 and up are the light half of the 16-color table.
fn background_theme(colorfgbg: Option<&str>) -> Theme {
  let background = colorfgbg
    .and_then(|value| value.rsplit(';').next())
    .and_then(|bg| bg.parse::<u8>().ok());
  match background {
    Some(bg) if bg >= 8 => Theme::Light,
    _ => Theme::Dark,
  }
}

type Rgb = (u8, u8, u8);

#[derive(Debug)]
struct Palette {
  timestamp: Rgb,
  primary: Rgb,
  accent: Rgb,
  info: Rgb,
  success: Rgb,
  label: Rgb,
  value: Rgb,
}

const DARK: Palette = Palette {
  timestamp: (118, 166, 166),
  primary: (191, 126, 4),
  accent: (166, 84, 55),
  info: (118, 166, 166),
  success: (118, 166, 166),
  label: (217, 164, 4),
  value: (242, 211, 56),
};

const LIGHT: Palette = Palette {
  timestamp: (92, 62, 38),
  primary: (70, 42, 25),
  accent: (211, 99, 70),
  info: (40, 111, 170),
  success: (34, 142, 90),
  label: (176, 103, 66),
  value: (199, 146, 76),
};

/// Per-role terminal colors. Every role is `Color::Reset` when colors are off.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  palette: Option<&'static Palette>,
}

impl Colors {
  pub fn new(enabled: bool, theme: Theme) -> Self {
    let palette = match theme {
      Theme::Light => &LIGHT,
      Theme::Dark | Theme::Auto => &DARK,
    };
    Self {
      palette: enabled.then_some(palette),
    }
  }

  fn role(&self, pick: fn(&Palette) -> Rgb) -> Color {
    self.palette.map_or(Color::Reset, |palette| {
      let (r, g, b) = pick(palette);
      Color::Rgb { r, g, b }
    })
  }

  pub fn timestamp(&self) -> Color {
    self.role(|p| p.timestamp)
  }

  pub fn primary(&self) -> Color {
    self.role(|p| p.primary)
  }

  pub fn accent(&self) -> Color {
    self.role(|p| p.accent)
  }

  pub fn info(&self) -> Color {
    self.role(|p| p.info)
  }

  pub fn success(&self) -> Color {
    self.role(|p| p.success)
  }

  pub fn label(&self) -> Color {
    self.role(|p| p.label)
  }

  pub fn value(&self) -> Color {
    self.role(|p| p.value)
  }
}

/// The same color for a table cell. Palettes only hold RGB values, so anything else resets.
pub fn cell_color(color: Color) -> CellColor {
  match color {
    Color::Rgb { r, g, b } => CellColor::Rgb { r, g, b },
    _ => CellColor::Reset,
  }
}

fn clap_color((r, g, b): Rgb) -> Option<ClapColor> {
  Some(ClapColor::Rgb(RgbColor(r, g, b)))
}

/// Help output styling, drawn from the dark palette.
pub fn clap_styles() -> Styles {
  Styles::styled()
    .header(Style::new().bold().underline().fg_color(clap_color(DARK.label)))
    .usage(Style::new().bold().fg_color(clap_color(DARK.label)))
    .literal(Style::new().fg_color(clap_color(DARK.success)))
    .placeholder(Style::new().fg_color(clap_color(DARK.info)))
    .error(Style::new().bold().fg_color(clap_color(DARK.accent)))
    .valid(Style::new().fg_color(clap_color(DARK.success)))
    .invalid(Style::new().bold().fg_color(clap_color(DARK.accent)))
}
