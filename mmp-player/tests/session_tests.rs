//! Interactive session tests
//!
//! Drives the control loop with scripted input and checks the console
//! protocol: menu handling, the add-item prompt sequence, playback output
//! and recovery from anticipated errors.

use std::io::Cursor;

use mmp_common::config::OutputFormat;
use mmp_player::{Error, Playable, Renderer, Session};

/// Outcome of a scripted session
struct Transcript {
    result: mmp_player::Result<()>,
    output: String,
    leaves: usize,
    plays: u64,
}

fn run_script(script: &str, renderer: Renderer, format: OutputFormat) -> Transcript {
    let mut session = Session::new(Cursor::new(script.as_bytes()), Vec::new(), renderer, format);
    let result = session.run();
    let leaves = session.playlist().leaf_count();
    let plays = session.player().plays_completed();
    let output = String::from_utf8(session.into_output()).expect("Output is UTF-8");
    Transcript {
        result,
        output,
        leaves,
        plays,
    }
}

fn run(script: &str) -> Transcript {
    run_script(script, Renderer::Hardware, OutputFormat::Text)
}

#[test]
fn test_menu_and_exit() {
    let t = run("4\n");

    assert!(t.result.is_ok());
    assert!(t.output.contains(" === Modular Media Player Menu === \n"));
    assert!(t.output.contains("1. Add a new media item to playlist\n"));
    assert!(t.output.contains("2. Play current playlist\n"));
    assert!(t.output.contains("3. Switch renderer (Current: Hardware)\n"));
    assert!(t.output.contains("4. Exit\n"));
    assert!(t.output.contains("Choose an option (1-4): "));
    assert!(t.output.ends_with("Exiting Modular Media Player. Goodbye!\n"));
}

#[test]
fn test_local_item_with_subtitles_then_play() {
    let t = run("1\nlocal\nmovie.mp4\ny\nn\nn\n2\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.leaves, 1);
    assert_eq!(t.plays, 1);
    assert!(t.output.contains("Media item added successfully!\n"));
    assert!(t.output.contains(
        "Hardware rendering: Media data\n\
         Processing: Data from local file: movie.mp4\n\
         Rendering subtitles.\n"
    ));
    assert!(!t.output.contains("Applying audio equalizer."));
    assert!(!t.output.contains("Adding watermark."));
}

#[test]
fn test_prompt_sequence_for_local_source() {
    let t = run("1\nlocal\nclip.mkv\nn\nn\nn\n4\n");

    // No caching question for local files
    assert!(!t.output.contains("Enable proxy caching"));
    assert!(t.output.contains(
        "Enter media source type (local/hls/api): \
         Enter file name: \
         Add subtitles feature? (y/n): \
         Add audio equalizer feature? (y/n): \
         Add watermark feature? (y/n): \
         Media item added successfully!"
    ));
}

#[test]
fn test_prompt_sequence_for_remote_sources() {
    let t = run("1\nhls\nlive.example.com\nn\nn\nn\nn\n1\napi\napi.example.com\nn\nn\nn\nn\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.leaves, 2);
    assert!(t.output.contains(
        "Enter stream URL: \
         Enable proxy caching for this source? (y/n): \
         Add subtitles feature? (y/n): "
    ));
    assert!(t.output.contains(
        "Enter API endpoint: \
         Enable proxy caching for this source? (y/n): "
    ));
}

#[test]
fn test_cached_stream_played_twice() {
    let t = run("1\nhls\nstream.example.com\ny\nn\nn\ny\n2\n2\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.plays, 2);
    assert!(t.output.contains(
        "Hardware rendering: Media data\n\
         Caching remote data.\n\
         Processing: Streamed data from HLS: stream.example.com\n\
         Adding watermark.\n"
    ));
    assert!(t.output.contains(
        "Hardware rendering: Media data\n\
         Using cached data.\n\
         Processing: Streamed data from HLS: stream.example.com\n\
         Adding watermark.\n"
    ));
    assert_eq!(t.output.matches("Caching remote data.").count(), 1);
    assert_eq!(t.output.matches("Using cached data.").count(), 1);
}

#[test]
fn test_uncached_remote_never_reports_cache() {
    let t = run("1\napi\napi.example.com\nn\nn\nn\nn\n2\n2\n4\n");

    assert!(t.result.is_ok());
    assert!(!t.output.contains("Caching remote data."));
    assert!(!t.output.contains("Using cached data."));
    assert_eq!(
        t.output
            .matches("Processing: Data from remote API: api.example.com\n")
            .count(),
        2
    );
}

#[test]
fn test_all_features_in_fixed_order() {
    let t = run("1\nlocal\na.mp4\nyes\nY\ny\n2\n4\n");

    assert!(t.output.contains(
        "Processing: Data from local file: a.mp4\n\
         Rendering subtitles.\n\
         Applying audio equalizer.\n\
         Adding watermark.\n"
    ));
}

#[test]
fn test_playlist_plays_items_in_insertion_order() {
    let t = run("1\nlocal\nfirst.mp4\nn\nn\nn\n1\nlocal\nsecond.mp4\nn\ny\nn\n2\n4\n");

    assert!(t.output.contains(
        "Hardware rendering: Media data\n\
         Processing: Data from local file: first.mp4\n\
         Processing: Data from local file: second.mp4\n\
         Applying audio equalizer.\n"
    ));
    // One render per play request, not per item
    assert_eq!(t.output.matches("rendering: Media data").count(), 1);
}

#[test]
fn test_switch_renderer_between_plays() {
    let t = run("1\nlocal\na.mp4\nn\nn\nn\n2\n3\n2\n4\n");

    assert!(t.output.contains("Switched to Software renderer.\n"));
    assert!(t.output.contains("3. Switch renderer (Current: Software)\n"));

    let hw = t.output.find("Hardware rendering: Media data").unwrap();
    let sw = t.output.find("Software rendering: Media data").unwrap();
    assert!(hw < sw);
    assert_eq!(t.output.matches("Processing: Data from local file: a.mp4").count(), 2);
}

#[test]
fn test_switch_renderer_toggles_back() {
    let t = run("3\n3\n4\n");

    assert!(t.output.contains("Switched to Software renderer.\n"));
    assert!(t.output.contains("Switched to Hardware renderer.\n"));
}

#[test]
fn test_initial_software_renderer() {
    let t = run_script("1\nlocal\na.mp4\nn\nn\nn\n2\n4\n", Renderer::Software, OutputFormat::Text);

    assert!(t.output.contains("3. Switch renderer (Current: Software)\n"));
    assert!(t.output.contains("Software rendering: Media data\n"));
}

#[test]
fn test_invalid_source_kind_recovered() {
    let t = run("1\nftp\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.leaves, 0);
    assert!(t.output.contains("Invalid source type.\n"));
    assert!(!t.output.contains("Enter file name: "));
}

#[test]
fn test_source_kind_is_case_insensitive() {
    let t = run("1\nLOCAL\na.mp4\nn\nn\nn\n4\n");

    assert_eq!(t.leaves, 1);
}

#[test]
fn test_empty_origin_recovered() {
    let t = run("1\nlocal\n   \n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.leaves, 0);
    assert!(t.output.contains("Invalid source: local origin must not be empty\n"));
}

#[test]
fn test_empty_remote_origin_skips_remaining_questions() {
    let t = run("1\nhls\n\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.leaves, 0);
    assert!(t.output.contains("Invalid source: hls origin must not be empty\n"));
    assert!(!t.output.contains("Enable proxy caching"));
    assert!(!t.output.contains("Add subtitles feature?"));
}

#[test]
fn test_empty_playlist_recovered() {
    let t = run("2\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.plays, 0);
    assert!(t.output.contains("Playlist is empty. Please add media first.\n"));
    assert!(!t.output.contains("rendering:"));
}

#[test]
fn test_unknown_number_redisplays_menu() {
    let t = run("9\n0\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(
        t.output
            .matches("Invalid option. Please choose between 1 and 4.\n")
            .count(),
        2
    );
    assert_eq!(t.output.matches(" === Modular Media Player Menu === ").count(), 3);
}

#[test]
fn test_non_numeric_choice_is_fatal() {
    let t = run("1\nlocal\na.mp4\nn\nn\nn\nplay\n4\n");

    assert!(matches!(t.result, Err(Error::InvalidMenuChoice(ref s)) if s == "play"));
    // The playlist built so far is untouched
    assert_eq!(t.leaves, 1);
    assert!(!t.output.contains("Goodbye!"));
}

#[test]
fn test_input_closed_before_exit() {
    let t = run("1\nlocal\n");

    assert!(matches!(t.result, Err(Error::InputClosed)));
}

#[test]
fn test_blank_lines_at_menu_prompt_are_skipped() {
    let t = run("\n\n4\n");

    assert!(t.result.is_ok());
    assert_eq!(t.output.matches(" === Modular Media Player Menu === ").count(), 1);
}

#[test]
fn test_json_output_format() {
    let t = run_script("1\nlocal\nmovie.mp4\ny\nn\nn\n2\n4\n", Renderer::Hardware, OutputFormat::Json);

    assert!(t.output.contains(
        "{\"type\":\"Rendered\",\"renderer\":\"hardware\",\"content\":\"Media data\"}\n\
         {\"type\":\"Processed\",\"content\":\"Data from local file: movie.mp4\"}\n\
         {\"type\":\"FeatureApplied\",\"feature\":\"subtitles\"}\n"
    ));
    // Menu stays plain text
    assert!(t.output.contains("4. Exit\n"));
}
