//! Command-line overrides for the world configuration.

use clap::Parser;
use hex_currents::WorldConfig;

/// Wrapping hex map with ocean currents.
#[derive(Parser, Debug)]
#[command(name = "hex-currents")]
#[command(about = "Generate and view a wrapping hex map with ocean currents", long_about = None)]
pub struct Args {
    /// Map width in cells (wraps horizontally)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Map height in cells
    #[arg(long, value_parser = clap::value_parser!(u32).range(5..))]
    height: Option<u32>,

    /// Terrain noise seed
    #[arg(short, long)]
    seed: Option<u32>,

    /// Radius of the noise sampling cylinder
    #[arg(long)]
    noise_radius: Option<f64>,

    /// Vertical stretch of the noise sampling cylinder
    #[arg(long)]
    noise_height: Option<f64>,

    /// Noise value above which a cell is land
    #[arg(long, allow_negative_numbers = true)]
    sea_level: Option<f32>,

    /// Noise value at which land is fully mountainous
    #[arg(long, allow_negative_numbers = true)]
    mountain_level: Option<f32>,

    /// World units per layout unit
    #[arg(long)]
    tile_size: Option<f32>,

    /// Drawn hex radius relative to the layout (below 1 leaves gaps)
    #[arg(long)]
    margin_size: Option<f32>,

    /// Start with the current overlay hidden
    #[arg(long)]
    hide_currents: bool,
}

impl Args {
    /// Applies every given override on top of `config`.
    pub fn apply(self, mut config: WorldConfig) -> WorldConfig {
        let map = &mut config.map;
        if let Some(width) = self.width {
            map.width = width;
        }
        if let Some(height) = self.height {
            map.height = height;
        }
        if let Some(seed) = self.seed {
            map.seed = seed;
        }
        if let Some(radius) = self.noise_radius {
            map.noise_radius = radius;
        }
        if let Some(height) = self.noise_height {
            map.noise_height = height;
        }
        if let Some(level) = self.sea_level {
            map.sea_level = level;
        }
        if let Some(level) = self.mountain_level {
            map.mountain_level = level;
        }

        let render = &mut config.render;
        if let Some(size) = self.tile_size {
            render.tile_size = size;
        }
        if let Some(size) = self.margin_size {
            render.margin_size = size;
        }
        if self.hide_currents {
            render.show_currents = false;
        }
        config
    }
}

/// Parses the process arguments over [`WorldConfig::default`].
pub fn config_from_args() -> WorldConfig {
    Args::parse().apply(WorldConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<WorldConfig, clap::Error> {
        let argv = std::iter::once("hex-currents").chain(args.iter().copied());
        Ok(Args::try_parse_from(argv)?.apply(WorldConfig::default()))
    }

    #[test]
    fn no_arguments_keep_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.map, WorldConfig::default().map);
        assert!(config.render.show_currents);
    }

    #[test]
    fn overrides_are_applied() {
        let config = parse(&[
            "--width",
            "30",
            "--height",
            "12",
            "--seed",
            "9",
            "--sea-level",
            "-0.1",
            "--hide-currents",
        ])
        .unwrap();
        assert_eq!(config.map.width, 30);
        assert_eq!(config.map.height, 12);
        assert_eq!(config.map.seed, 9);
        assert_eq!(config.map.sea_level, -0.1);
        assert!(!config.render.show_currents);
    }

    #[test]
    fn degenerate_dimensions_are_rejected_by_parser() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "2"]).is_err());
    }
}
