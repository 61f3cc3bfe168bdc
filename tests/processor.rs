use ampsim::amp::processor::Processor;
use ampsim::amp::stages::common::db_to_lin;
use ampsim::io::bus_layout::{BusLayout, SUPPORTED_LAYOUTS};
use ampsim::params::{ParamId, ParameterStore};
use anyhow::Result;

const SAMPLE_RATE: f64 = 48_000.0;
const BLOCK_SIZE: usize = 480;
// 50 ms at 48 kHz is exactly five blocks of 480.
const RAMP_BLOCKS: usize = 5;

fn sine_block(offset: usize) -> Vec<f32> {
    (0..BLOCK_SIZE)
        .map(|i| {
            let t = (offset + i) as f32 / SAMPLE_RATE as f32;
            (2.0 * std::f32::consts::PI * 220.0 * t).sin() * 0.5
        })
        .collect()
}

/// Feed stereo sine blocks until the ramps have settled, then return one more block's
/// input and output.
fn settle_and_capture(
    processor: &mut Processor,
    params: &ParameterStore,
) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    for block in 0..RAMP_BLOCKS {
        let mut left = sine_block(block * BLOCK_SIZE);
        let mut right = left.clone();
        processor.process_block(&mut [&mut left[..], &mut right[..]], params);
    }

    let input = sine_block(RAMP_BLOCKS * BLOCK_SIZE);
    let mut left = input.clone();
    let mut right = input.clone();
    processor.process_block(&mut [&mut left[..], &mut right[..]], params);
    (input, left, right)
}

fn assert_scaled(input: &[f32], output: &[f32], gain: f32) {
    for (i, (&x, &y)) in input.iter().zip(output).enumerate() {
        let expected = x * gain;
        assert!(
            (y - expected).abs() <= 1e-5 * gain.max(1.0),
            "sample {i}: expected {expected}, got {y}"
        );
    }
}

#[test]
fn input_trim_scales_after_ramp() -> Result<()> {
    for gain_db in [-24.0f32, -12.0, -3.0, 0.0, 6.0, 12.0, 24.0] {
        let params = ParameterStore::new();
        let mut processor = Processor::default();
        processor.prepare_to_play(SAMPLE_RATE, BLOCK_SIZE);

        params.set(ParamId::Input, gain_db);
        let (input, left, right) = settle_and_capture(&mut processor, &params);

        assert!(!processor.input_gain().is_smoothing(), "{gain_db} dB still ramping");
        assert_scaled(&input, &left, db_to_lin(gain_db));
        assert_scaled(&input, &right, db_to_lin(gain_db));
    }

    Ok(())
}

#[test]
fn output_trim_scales_after_ramp() -> Result<()> {
    for gain_db in [-60.0f32, -40.0, -18.0, 0.0, 3.0, 12.0] {
        let params = ParameterStore::new();
        let mut processor = Processor::default();
        processor.prepare_to_play(SAMPLE_RATE, BLOCK_SIZE);

        params.set(ParamId::Output, gain_db);
        let (input, left, _) = settle_and_capture(&mut processor, &params);

        assert_scaled(&input, &left, db_to_lin(gain_db));
    }

    Ok(())
}

#[test]
fn trims_combine_in_series() -> Result<()> {
    let params = ParameterStore::new();
    params.set(ParamId::Input, 12.0);
    params.set(ParamId::Output, -6.0);

    let mut processor = Processor::default();
    processor.prepare_to_play(SAMPLE_RATE, BLOCK_SIZE);
    let (input, left, _) = settle_and_capture(&mut processor, &params);

    assert_scaled(&input, &left, db_to_lin(12.0) * db_to_lin(-6.0));
    Ok(())
}

#[test]
fn unity_trims_pass_audio_through() -> Result<()> {
    let params = ParameterStore::new();
    let mut processor = Processor::default();
    processor.prepare_to_play(SAMPLE_RATE, BLOCK_SIZE);

    let input = sine_block(0);
    let mut left = input.clone();
    let mut right = input.clone();
    processor.process_block(&mut [&mut left[..], &mut right[..]], &params);
    assert_eq!(left, input);
    assert_eq!(right, input);

    // Move away and back, then let it settle again.
    params.set(ParamId::Input, -12.0);
    settle_and_capture(&mut processor, &params);
    params.set(ParamId::Input, 0.0);
    let (input, left, right) = settle_and_capture(&mut processor, &params);
    assert_eq!(left, input);
    assert_eq!(right, input);

    Ok(())
}

#[test]
fn gain_change_ramps_instead_of_jumping() -> Result<()> {
    let params = ParameterStore::new();
    let mut processor = Processor::default();
    processor.prepare_to_play(SAMPLE_RATE, BLOCK_SIZE);

    params.set(ParamId::Input, 24.0);
    let mut block = vec![1.0f32; BLOCK_SIZE];
    processor.process_block(&mut [&mut block[..]], &params);

    let target = db_to_lin(24.0);
    let largest_step = block
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(0.0f32, f32::max);

    assert!(block[0] < 1.01, "first sample jumped to {}", block[0]);
    assert!(block[BLOCK_SIZE - 1] < target, "ramp finished too early");
    assert!(largest_step < 0.01, "step of {largest_step} would click");
    assert!(processor.input_gain().is_smoothing());

    Ok(())
}

#[test]
fn channels_beyond_the_input_are_cleared() -> Result<()> {
    let params = ParameterStore::new();
    let mut processor = Processor::new(BusLayout::MONO);
    processor.prepare_to_play(SAMPLE_RATE, BLOCK_SIZE);

    let mut first = vec![0.25f32; BLOCK_SIZE];
    let mut second = vec![0.25f32; BLOCK_SIZE];
    processor.process_block(&mut [&mut first[..], &mut second[..]], &params);

    assert!(first.iter().all(|&s| s == 0.25));
    assert!(second.iter().all(|&s| s == 0.0));
    Ok(())
}

#[test]
fn bus_layout_check() {
    for layout in SUPPORTED_LAYOUTS {
        assert!(
            Processor::is_bus_layout_supported(&layout),
            "{layout} should be accepted"
        );
    }

    for (inputs, outputs) in [(1, 2), (2, 1), (2, 0), (0, 1), (3, 3), (4, 4), (8, 8)] {
        let layout = BusLayout::new(inputs, outputs);
        assert!(
            !Processor::is_bus_layout_supported(&layout),
            "{layout} should be rejected"
        );
    }
}

#[test]
fn prepare_again_adopts_new_sample_rate() -> Result<()> {
    let params = ParameterStore::new();
    let mut processor = Processor::default();
    processor.prepare_to_play(SAMPLE_RATE, BLOCK_SIZE);
    processor.prepare_to_play(96_000.0, 1024);

    assert_eq!(processor.spec().sample_rate, 96_000.0);
    assert_eq!(processor.spec().maximum_block_size, 1024);

    params.set(ParamId::Output, -20.0);
    // Twice the samples for the same 50 ms, so half of them is still mid-ramp.
    let mut block = vec![1.0f32; 2400];
    processor.process_block(&mut [&mut block[..]], &params);

    assert!(processor.output_gain().is_smoothing());
    assert!(block[2399] > 0.5);
    Ok(())
}
