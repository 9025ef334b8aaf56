use winsafe::{DEVMODE, GmidxEnum, co};

use crate::display::{DisplayBackend, DisplayError};
use crate::types::{DisplayMode, Orientation, Resolution};

type Result<T = ()> = std::result::Result<T, DisplayError>;

/// The display the calling thread runs on, driven through the GDI display settings API
#[derive(Debug, Clone, Copy, Default)]
pub struct GdiDisplay;

impl GdiDisplay {
    pub fn primary() -> Self {
        Self
    }

    /// Reads the full current mode record
    fn snapshot(&self) -> Result<DEVMODE> {
        let mut devmode = DEVMODE::default();
        winsafe::EnumDisplaySettings(
            None,
            GmidxEnum::Enum(co::ENUM_SETTINGS::CURRENT),
            &mut devmode,
        )
        .map_err(|e| DisplayError::WinAPI(format!("EnumDisplaySettings failed: {}", e)))?;
        Ok(devmode)
    }
}

impl DisplayBackend for GdiDisplay {
    fn current_mode(&self) -> Result<DisplayMode> {
        let devmode = self.snapshot()?;

        Ok(DisplayMode::new(
            Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight),
            orientation_from_winsafe(devmode.dmDisplayOrientation())?,
        ))
    }

    fn commit(&self, mode: &DisplayMode) -> Result {
        let mut devmode = self.snapshot()?;
        write_mode(&mut devmode, mode);

        let result = winsafe::ChangeDisplaySettingsEx(
            None,
            Some(&mut devmode),
            co::CDS::UPDATEREGISTRY | co::CDS::GLOBAL,
        );
        match result {
            Ok(_) => Ok(()),
            Err(err) => Err(DisplayError::FailedToCommit(err.to_string())),
        }
    }
}

/// Overwrites resolution and orientation in a queried record; refresh rate,
/// bit depth and the other fields stay as the driver reported them.
fn write_mode(devmode: &mut DEVMODE, mode: &DisplayMode) {
    devmode.dmPelsWidth = mode.resolution.width;
    devmode.dmPelsHeight = mode.resolution.height;
    devmode.set_dmDisplayOrientation(orientation_to_winsafe(mode.orientation));
    // the orientation field is always treated as settable
    devmode.dmFields |= co::DM::DISPLAYORIENTATION;
}

fn orientation_from_winsafe(co_dmdo: co::DMDO) -> Result<Orientation> {
    match co_dmdo {
        co::DMDO::DEFAULT => Ok(Orientation::Landscape),
        co::DMDO::D90 => Ok(Orientation::PortraitFlipped),
        co::DMDO::D180 => Ok(Orientation::LandscapeFlipped),
        co::DMDO::D270 => Ok(Orientation::Portrait),
        _ => Err(DisplayError::InvalidOrientation(co_dmdo.to_string())),
    }
}

fn orientation_to_winsafe(orientation: Orientation) -> co::DMDO {
    match orientation {
        Orientation::Landscape => co::DMDO::DEFAULT,
        Orientation::PortraitFlipped => co::DMDO::D90,
        Orientation::LandscapeFlipped => co::DMDO::D180,
        Orientation::Portrait => co::DMDO::D270,
    }
}
