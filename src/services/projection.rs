//! Rendering a resolved cube for downstream solvers.

use std::collections::BTreeMap;

use serde::Serialize;

use cube_color::ColorName;

use crate::error::ConsistencyError;
use crate::models::cube::invert_side_colors;
use crate::models::{CubeState, ResolutionReport, ResolvedCube, SideId};

/// The color each side is labeled with, indexed by [`SideId::ordinal`].
///
/// Odd cubes keep the middle center colors of `frame`. Even cubes have no
/// fixed center, so each side takes the color most of its squares resolved
/// to. A tie goes to the side's `frame` color when it is among the leaders,
/// otherwise to the first leader in [`ColorName::ALL`] order.
pub fn side_colors(
    cube: &CubeState,
    frame: [ColorName; 6],
) -> Result<[ColorName; 6], ConsistencyError> {
    if cube.size().is_odd() {
        return Ok(frame);
    }

    let topology = cube.topology();
    let mut colors = frame;
    for side in SideId::ALL {
        let mut counts = [0usize; 6];
        for position in topology.side(side).positions() {
            let color = cube
                .facelet(position)
                .and_then(|f| f.color())
                .ok_or(ConsistencyError::UnresolvedSquare { position })?;
            counts[color.index()] += 1;
        }

        let top = counts.iter().copied().max().unwrap_or(0);
        let preferred = frame[side.ordinal()];
        colors[side.ordinal()] = if counts[preferred.index()] == top {
            preferred
        } else {
            ColorName::ALL
                .into_iter()
                .find(|c| counts[c.index()] == top)
                .unwrap_or(preferred)
        };
    }

    tracing::debug!(
        sides = ?colors.iter().map(|c| c.code()).collect::<Vec<_>>(),
        "Voted side colors"
    );

    invert_side_colors(&colors)?;
    Ok(colors)
}

/// Side labels in U, R, F, D, L, B order, each side row-major.
///
/// A square's label is the side whose color it carries (see
/// [`side_colors`]), so a solved 3x3 projects to nine of each letter in that
/// order.
pub fn project(cube: &ResolvedCube) -> String {
    let topology = cube.topology();
    let colors = cube.colors();

    SideId::PROJECTION_ORDER
        .iter()
        .flat_map(|&side| topology.side(side).positions())
        .map(|position| cube.side_for(colors[position - 1]).label())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RgbReport {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<[u8; 3]> for RgbReport {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideReport {
    pub color_name: String,
    /// Scanned value of the anchor that named this color
    pub color_scan: RgbReport,
    #[serde(rename = "colorHTML")]
    pub color_html: RgbReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareReport {
    pub color_name: String,
    pub color_scan: RgbReport,
    pub final_side: String,
}

/// Full JSON view of a resolved cube.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeReport {
    pub kociemba: String,
    pub size: usize,
    pub sides: BTreeMap<String, SideReport>,
    pub squares: BTreeMap<usize, SquareReport>,
    pub resolution: ResolutionReport,
}

impl From<&ResolvedCube> for CubeReport {
    fn from(cube: &ResolvedCube) -> Self {
        let sides = SideId::ALL
            .iter()
            .map(|&side| {
                let color = cube.side_color(side);
                let scan = cube.anchor(color).map_or(color.html().to_bytes(), |a| a.rgb);
                (
                    side.to_string(),
                    SideReport {
                        color_name: color.code().to_string(),
                        color_scan: scan.into(),
                        color_html: color.html().to_bytes().into(),
                    },
                )
            })
            .collect();

        let squares = cube
            .facelets()
            .iter()
            .zip(cube.colors())
            .map(|(facelet, &color)| {
                (
                    facelet.position,
                    SquareReport {
                        color_name: color.code().to_string(),
                        color_scan: facelet.rgb.into(),
                        final_side: cube.side_for(color).to_string(),
                    },
                )
            })
            .collect();

        Self {
            kociemba: project(cube),
            size: cube.size().get(),
            sides,
            squares,
            resolution: cube.report().clone(),
        }
    }
}
