#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and organizing arbitrary text must never panic
        let report = testrun::parse_with_diagnostics(content);
        let catalog = testrun::organize(report.records);

        let mut model = testrun::SelectionModel::new(catalog);
        model.select_all();
        let _ = testrun::render_document(&model, testrun::DocumentFormat::Csv, "Fuzz");
    }
});
