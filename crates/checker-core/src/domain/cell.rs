//! Cell planning.
//!
//! A *cell* is one preview unit: a header label above a frame sized to the
//! device.  Ordinary devices produce one cell.  Rotatable devices produce two
//! adjacent cells, portrait first, then landscape with the dimensions swapped.

use super::device::DeviceProfile;

/// Which way round a cell shows its device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A non-rotatable device, shown as declared.
    Fixed,
    /// Portrait half of a rotatable pair: declared width × height.
    Vertical,
    /// Landscape half of a rotatable pair: height × width.
    Horizontal,
}

/// Everything needed to create one cell on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSpec {
    /// Header text, e.g. `"iPad - Vertical - 768*1024"`.
    pub label: String,
    /// Frame width in logical pixels.
    pub width: u32,
    /// Frame height in logical pixels.
    pub height: u32,
    pub orientation: Orientation,
}

impl CellSpec {
    /// Returns the cells for one device: one when fixed, two (vertical then
    /// horizontal) when rotatable.
    pub fn for_device(device: &DeviceProfile) -> Vec<CellSpec> {
        let DeviceProfile {
            name,
            width,
            height,
            rotatable,
        } = device;

        if !rotatable {
            return vec![CellSpec {
                label: format!("{name} - {width}*{height}"),
                width: *width,
                height: *height,
                orientation: Orientation::Fixed,
            }];
        }

        vec![
            CellSpec {
                label: format!("{name} - Vertical - {width}*{height}"),
                width: *width,
                height: *height,
                orientation: Orientation::Vertical,
            },
            CellSpec {
                label: format!("{name} - Horizontal - {height}*{width}"),
                width: *height,
                height: *width,
                orientation: Orientation::Horizontal,
            },
        ]
    }
}

/// Plans every cell for the resolved device list, in device order.
pub fn plan_cells(devices: &[DeviceProfile]) -> Vec<CellSpec> {
    devices.iter().flat_map(CellSpec::for_device).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
