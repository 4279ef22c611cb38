//! The picking session.
//!
//! A [`Session`] owns everything one picker needs between ticks: the pixel
//! source, the validated settings, the display chain, the naming
//! dictionary and the swatch. Each tick reads the pointer, captures the
//! neighborhood, samples it and derives every view of the result.
//!
//! ```rust
//! use huepick_core::{PixelBuffer, Point, Rect, Rgb8};
//! use huepick_sample::{ImageScreen, Session, Settings};
//!
//! let shot = PixelBuffer::filled(Rect::from_size(32, 32), Rgb8::new(255, 0, 0));
//! let screen = ImageScreen::new(shot).with_pointer(Point::new(10, 10));
//! let mut session = Session::new(screen, Settings::default()).unwrap();
//!
//! let sample = session.tick().unwrap();
//! assert_eq!(sample.text.hex, "#ff0000");
//! assert_eq!(sample.name, "red");
//! ```

use crate::capture::Screen;
use crate::config::{Settings, SettingsResult};
use crate::sampler::{SampleRegion, compute_sample_rect, sample};
use crate::swatch::Swatch;
use crate::ticker::TickScheduler;
use huepick_color::{
    GamutAnalyzer, LabContext, ModelColor, ModelText, NamingService, TransformationChain,
    heuristic_contrast, model_text, rgb_to_lab, rgb_to_lch,
};
use huepick_core::{Color, Error, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Resolution of the slider gamut masks.
pub const MASK_STEPS: usize = 32;

/// Out-of-gamut masks for the Lab and LCH component sliders.
///
/// `lab[i]` sweeps channel `i` of the sample's Lab value across its range
/// while holding the others; `true` marks a position the screen cannot
/// show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamutMasks {
    /// L, a, b sweeps
    pub lab: [Vec<bool>; 3],
    /// L, C, h sweeps
    pub lch: [Vec<bool>; 3],
}

impl GamutMasks {
    fn compute(color: Color, ctx: &LabContext, gamut: &GamutAnalyzer) -> Self {
        let lab = ModelColor::Lab(rgb_to_lab(color, ctx));
        let lch = ModelColor::Lch(rgb_to_lch(color, ctx));
        Self {
            lab: [0, 1, 2].map(|c| gamut.mask(lab, c, MASK_STEPS)),
            lch: [0, 1, 2].map(|c| gamut.mask(lch, c, MASK_STEPS)),
        }
    }
}

/// Everything derived from one successful tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Sampled color, the canonical value.
    pub color: Color,
    /// `color` after the display chain; presentation only.
    pub display: Color,
    /// Color codes of `color` in every model.
    pub text: ModelText,
    /// Nearest named color.
    pub name: String,
    /// Slider masks, when enabled in settings.
    pub gamut: Option<GamutMasks>,
    /// Heuristic contrast of `color` against the reference color.
    pub contrast: f32,
    /// Region the color was averaged over.
    pub region: SampleRegion,
}

/// An interactive picking session over a [`Screen`].
pub struct Session<S: Screen> {
    screen: S,
    settings: Settings,
    chain: Arc<TransformationChain>,
    naming: NamingService,
    ctx: LabContext,
    gamut: GamutAnalyzer,
    swatch: Swatch,
    ticker: TickScheduler,
}

impl<S: Screen> Session<S> {
    /// Starts a session. The first tick is due immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`](crate::SettingsError::Invalid) if
    /// `settings` fail validation.
    pub fn new(screen: S, settings: Settings) -> SettingsResult<Self> {
        settings.validate()?;
        let ctx = LabContext::new(settings.illuminant, settings.observer);
        let chain = Arc::new(TransformationChain::from_specs(&settings.transformations));
        let ticker = TickScheduler::new(settings.refresh_rate, Instant::now());
        info!(
            oversample = settings.oversample,
            falloff = %settings.falloff,
            illuminant = %settings.illuminant,
            observer = %settings.observer,
            rate = settings.refresh_rate,
            "session started"
        );
        Ok(Self {
            screen,
            chain,
            naming: NamingService::css(),
            ctx,
            gamut: GamutAnalyzer::new(ctx),
            swatch: Swatch::new(),
            ticker,
            settings,
        })
    }

    /// Runs one sampling step.
    ///
    /// On failure the swatch keeps its previous main color; the next tick
    /// simply tries again.
    ///
    /// # Errors
    ///
    /// [`Error::CaptureUnavailable`] when the pointer cannot be read or the
    /// capture does not cover the sample region.
    pub fn tick(&mut self) -> Result<Sample> {
        let pointer = self
            .screen
            .pointer()
            .ok_or_else(|| Error::capture_unavailable("pointer position unavailable"))?;
        let region = compute_sample_rect(pointer.position, pointer.monitor, self.settings.oversample)?;
        let pixels = self.screen.capture(region.rect)?;
        let color = sample(&pixels, &region, self.settings.falloff)?;

        let display = self.chain.apply(color);
        let sample = Sample {
            color,
            display,
            text: model_text(color, &self.ctx),
            name: self.naming.name(color, self.settings.imprecision_postfix),
            gamut: self
                .settings
                .out_of_gamut_mask
                .then(|| GamutMasks::compute(color, &self.ctx, &self.gamut)),
            contrast: heuristic_contrast(color, self.settings.contrast_reference),
            region,
        };
        self.swatch.set_main(color);
        debug!(at = %pointer.position, color = %color, name = %sample.name, "tick");
        Ok(sample)
    }

    /// Ticks if one is due at `now`.
    ///
    /// Returns `None` between ticks. Overdue ticks are collapsed into one.
    pub fn poll(&mut self, now: Instant) -> Option<Result<Sample>> {
        let info = self.ticker.poll(now)?;
        if info.skipped > 0 {
            debug!(skipped = info.skipped, "dropped overdue ticks");
        }
        let result = self.tick();
        if let Err(e) = &result {
            warn!(error = %e, "sample failed");
        }
        Some(result)
    }

    /// Replaces the settings wholesale; effective from the next tick.
    ///
    /// The display chain is rebuilt only when the transformation list
    /// changed, so a chain set through [`set_chain`](Self::set_chain)
    /// survives unrelated edits.
    pub fn reconfigure(&mut self, settings: Settings) -> SettingsResult<()> {
        settings.validate()?;
        if settings.transformations != self.settings.transformations {
            self.chain = Arc::new(TransformationChain::from_specs(&settings.transformations));
        }
        self.ctx = LabContext::new(settings.illuminant, settings.observer);
        self.gamut = GamutAnalyzer::new(self.ctx);
        self.ticker.set_rate(settings.refresh_rate);
        info!(
            oversample = settings.oversample,
            falloff = %settings.falloff,
            illuminant = %settings.illuminant,
            "settings changed"
        );
        self.settings = settings;
        Ok(())
    }

    /// Swaps the display chain.
    pub fn set_chain(&mut self, chain: Arc<TransformationChain>) {
        debug!(ops = chain.len(), "display chain replaced");
        self.chain = chain;
    }

    /// Stores the live color in the active swatch slot.
    ///
    /// Advances the slot when `rotate_swatch_after_sample` is set. Returns
    /// the slot written.
    pub fn store(&mut self) -> usize {
        self.swatch.store_main(self.settings.rotate_swatch_after_sample)
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current display chain.
    pub fn chain(&self) -> &Arc<TransformationChain> {
        &self.chain
    }

    /// Lab context derived from the settings.
    pub fn lab_context(&self) -> &LabContext {
        &self.ctx
    }

    /// The swatch.
    pub fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    /// Mutable swatch, for slot selection.
    pub fn swatch_mut(&mut self) -> &mut Swatch {
        &mut self.swatch
    }

    /// The pixel source.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Mutable pixel source, e.g. to move a scripted pointer.
    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }
}

impl<S: Screen> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("settings", &self.settings)
            .field("chain", &self.chain)
            .field("swatch", &self.swatch)
            .finish_non_exhaustive()
    }
}
