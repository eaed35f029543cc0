//! Head-mounted display presentation.
//!
//! When a headset runtime is present the user can toggle presentation from the
//! overlay button. While presenting, each frame is drawn once per eye into the
//! left and right halves of the surface with the eyes separated along the
//! camera's lateral axis. Without a runtime the toggle does nothing and frames
//! go straight to the window.

use glam::Vec3;

use crate::core::ViewportSize;

/// Whether headset presentation can be offered at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrSupport {
    Available,
    Unavailable(String),
}

impl XrSupport {
    pub fn is_available(&self) -> bool {
        matches!(self, XrSupport::Available)
    }
}

/// Look for an OpenXR runtime with a graphics binding wgpu can drive
#[cfg(feature = "openxr")]
pub fn probe() -> XrSupport {
    // SAFETY: loading the system OpenXR loader runs its initializers; nothing else holds it yet
    let entry = match unsafe { openxr::Entry::load() } {
        Ok(entry) => entry,
        Err(e) => return XrSupport::Unavailable(format!("no OpenXR loader: {}", e)),
    };

    match entry.enumerate_extensions() {
        Ok(extensions) if extensions.khr_vulkan_enable2 || extensions.khr_vulkan_enable => {
            XrSupport::Available
        }
        Ok(_) => XrSupport::Unavailable("runtime has no Vulkan binding".to_string()),
        Err(e) => XrSupport::Unavailable(format!("runtime query failed: {}", e)),
    }
}

#[cfg(not(feature = "openxr"))]
pub fn probe() -> XrSupport {
    XrSupport::Unavailable("built without the openxr feature".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Inactive,
    Presenting,
}

/// Pixel rectangle within the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewRect {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// One rendered view: where the eye sits relative to the camera, and where it lands on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeView {
    pub eye_offset: Vec3,
    pub rect: ViewRect,
}

/// Headset session toggled by the user
#[derive(Debug, Clone)]
pub struct HeadsetSession {
    support: XrSupport,
    state: SessionState,
    ipd: f32,
}

impl HeadsetSession {
    pub fn new(support: XrSupport, ipd: f32) -> Self {
        match &support {
            XrSupport::Available => log::info!("Headset runtime available"),
            XrSupport::Unavailable(reason) => log::info!("Headset unavailable: {}", reason),
        }
        Self {
            support,
            state: SessionState::Inactive,
            ipd,
        }
    }

    pub fn support(&self) -> &XrSupport {
        &self.support
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_presenting(&self) -> bool {
        self.state == SessionState::Presenting
    }

    /// Enter or leave presentation. A no-op when no runtime is available.
    pub fn toggle(&mut self) -> SessionState {
        if !self.support.is_available() {
            return self.state;
        }

        self.state = match self.state {
            SessionState::Inactive => SessionState::Presenting,
            SessionState::Presenting => SessionState::Inactive,
        };
        log::info!("Headset session: {:?}", self.state);
        self.state
    }

    /// Overlay button text
    pub fn button_label(&self) -> &'static str {
        match (&self.support, self.state) {
            (XrSupport::Unavailable(_), _) => "VR NOT SUPPORTED",
            (XrSupport::Available, SessionState::Inactive) => "ENTER VR",
            (XrSupport::Available, SessionState::Presenting) => "EXIT VR",
        }
    }

    /// Views to draw this frame: one pass-through view, or a left/right eye pair
    pub fn views(&self, size: ViewportSize) -> Vec<EyeView> {
        let full = ViewRect {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
        };

        if !self.is_presenting() {
            return vec![EyeView {
                eye_offset: Vec3::ZERO,
                rect: full,
            }];
        }

        let left_width = size.width / 2;
        let half_ipd = self.ipd * 0.5;
        vec![
            EyeView {
                eye_offset: Vec3::new(-half_ipd, 0.0, 0.0),
                rect: ViewRect {
                    width: left_width,
                    ..full
                },
            },
            EyeView {
                eye_offset: Vec3::new(half_ipd, 0.0, 0.0),
                rect: ViewRect {
                    x: left_width,
                    width: size.width - left_width,
                    ..full
                },
            },
        ]
    }
}
