use ampsim::amp::processor::Processor;
use ampsim::io::bus_layout::{BusLayout, SUPPORTED_LAYOUTS};
use ampsim::settings::Settings;
use log::warn;
use nih_plug::prelude::*;
use std::sync::Arc;

mod editor;
mod knob;
mod params;

pub use params::AmpSimParams;

pub struct AmpSim {
    params: Arc<AmpSimParams>,
    processor: Processor,
}

impl Default for AmpSim {
    fn default() -> Self {
        // Read only: hosts create instances while scanning.
        let settings = Settings::read().unwrap_or_else(|e| {
            warn!("Failed to load settings, using defaults: {e:#}");
            Settings::default()
        });

        Self {
            params: Arc::new(AmpSimParams::default()),
            processor: Processor::default().with_ramp_seconds(settings.gain_ramp_seconds()),
        }
    }
}

const fn io_layout(layout: BusLayout) -> AudioIOLayout {
    AudioIOLayout {
        main_input_channels: NonZeroU32::new(layout.input_channels as u32),
        main_output_channels: NonZeroU32::new(layout.output_channels as u32),
        ..AudioIOLayout::const_default()
    }
}

fn bus_layout(layout: &AudioIOLayout) -> BusLayout {
    BusLayout::new(
        layout.main_input_channels.map_or(0, NonZeroU32::get) as usize,
        layout.main_output_channels.map_or(0, NonZeroU32::get) as usize,
    )
}

impl AmpSim {
    /// Adopt the host's layout and buffer settings. False if the layout is refused.
    fn prepare(&mut self, audio_io_layout: &AudioIOLayout, buffer_config: &BufferConfig) -> bool {
        if !self.processor.set_bus_layout(bus_layout(audio_io_layout)) {
            return false;
        }

        self.processor.prepare_to_play(
            f64::from(buffer_config.sample_rate),
            buffer_config.max_buffer_size as usize,
        );

        true
    }
}

impl Plugin for AmpSim {
    const NAME: &'static str = "Amp Sim";
    const VENDOR: &'static str = "AmpSim";
    const URL: &'static str = "";
    const EMAIL: &'static str = "";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        io_layout(SUPPORTED_LAYOUTS[0]),
        io_layout(SUPPORTED_LAYOUTS[1]),
    ];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;
    const MIDI_OUTPUT: MidiConfig = MidiConfig::None;
    const SAMPLE_ACCURATE_AUTOMATION: bool = false;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn editor(&mut self, _async_executor: AsyncExecutor<Self>) -> Option<Box<dyn Editor>> {
        editor::create(self.params.clone(), self.params.editor_state.clone())
    }

    fn initialize(
        &mut self,
        audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        self.prepare(audio_io_layout, buffer_config)
    }

    fn reset(&mut self) {
        self.processor.reset();
    }

    fn deactivate(&mut self) {
        self.processor.release_resources();
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        self.processor
            .process_block(buffer.as_slice(), self.params.as_ref());

        ProcessStatus::Normal
    }
}

impl ClapPlugin for AmpSim {
    const CLAP_ID: &'static str = "com.ampsim.amp-sim";
    const CLAP_DESCRIPTION: Option<&'static str> = Some("Guitar amp simulator");
    const CLAP_MANUAL_URL: Option<&'static str> = None;
    const CLAP_SUPPORT_URL: Option<&'static str> = None;
    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Stereo,
        ClapFeature::Mono,
        ClapFeature::Distortion,
    ];
}

impl Vst3Plugin for AmpSim {
    const VST3_CLASS_ID: [u8; 16] = *b"AmpSimGuitarAmp1";
    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Distortion];
}

nih_export_clap!(AmpSim);
nih_export_vst3!(AmpSim);
