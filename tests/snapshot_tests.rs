use insta::{assert_debug_snapshot, assert_snapshot};
use tasktop::export::write_csv;
use tasktop::system::history::{HistoryBuffer, TickSample};
use tasktop::system::process::{ProcessRecord, SortColumn, SortState, sort_records};

fn mock_record(pid: u32, name: &str, cpu_percent: f32, memory_percent: f32) -> ProcessRecord {
    ProcessRecord {
        pid,
        name: name.to_string(),
        cpu_percent,
        memory_percent,
    }
}

fn mock_table() -> Vec<ProcessRecord> {
    vec![
        mock_record(1, "init", 0.0, 0.5),
        mock_record(212, "Firefox", 18.5, 22.75),
        mock_record(305, "bash", 0.2, 0.12),
        mock_record(407, "cargo", 96.0, 4.0),
        mock_record(512, "firefox-helper", 18.5, 3.5),
    ]
}

fn pids(records: &[ProcessRecord]) -> Vec<u32> {
    records.iter().map(|r| r.pid).collect()
}

#[test]
fn cpu_descending_keeps_ties_in_input_order() {
    let mut records = mock_table();
    sort_records(&mut records, SortColumn::Cpu, true);

    assert_debug_snapshot!(pids(&records), @r"
    [
        407,
        212,
        512,
        305,
        1,
    ]
    ");
}

#[test]
fn name_sort_ignores_case() {
    let mut records = mock_table();
    sort_records(&mut records, SortColumn::Name, false);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_debug_snapshot!(names, @r#"
    [
        "bash",
        "cargo",
        "Firefox",
        "firefox-helper",
        "init",
    ]
    "#);
}

#[test]
fn toggling_active_column_reverses_rows() {
    let mut records = mock_table();
    let mut sort = SortState::new(SortColumn::Memory, true);
    sort.apply(&mut records);
    sort.toggle(SortColumn::Memory, &mut records);

    assert!(!sort.descending);
    assert_eq!(pids(&records), vec![305, 1, 512, 407, 212]);
}

#[test]
fn csv_export_of_sorted_table() {
    let mut records = mock_table();
    records.push(mock_record(613, "worker, \"pool\"", 1.26, 0.01));
    sort_records(&mut records, SortColumn::Pid, false);

    let mut buf = Vec::new();
    write_csv(&records, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();

    assert_snapshot!(csv, @r#"
    PID,Process Name,CPU %,Memory %
    1,init,0.0%,0.50%
    212,Firefox,18.5%,22.75%
    305,bash,0.2%,0.12%
    407,cargo,96.0%,4.00%
    512,firefox-helper,18.5%,3.50%
    613,"worker, ""pool""",1.3%,0.01%
    "#);
}

#[test]
fn history_window_after_overflow() {
    let mut history = HistoryBuffer::new(4);
    for tick in 0..7 {
        history.push_tick(TickSample {
            cpu: tick as f32 * 10.0,
            memory: 50.0,
            gpu: (tick % 2 == 0).then_some(tick as f32),
        });
    }

    let cpu: Vec<f32> = history.cpu().iter().collect();
    let gpu: Vec<f32> = history.gpu().iter().collect();
    assert_debug_snapshot!((cpu, gpu), @r"
    (
        [
            30.0,
            40.0,
            50.0,
            60.0,
        ],
        [
            0.0,
            4.0,
            0.0,
            6.0,
        ],
    )
    ");
}
