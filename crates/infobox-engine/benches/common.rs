// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markup(groups: usize, entries_per_group: usize) -> String {
    let mut content = String::from("!cover.png|Cover image\n!https://example.com/a\\|b.png\n");

    for g in 0..groups {
        content.push_str(&format!("#Group {g}\n"));
        for e in 0..entries_per_group {
            match e % 4 {
                0 => content.push_str(&format!("-Key {e}:Value {e}\n")),
                1 => content.push_str(&format!("-Tags {e}:Red;Blue\\;Teal;Green\n")),
                2 => content.push_str(&format!("-Owner {e}:[[Person {e}|Alias]]\n")),
                _ => content.push_str(&format!("-Time\\: {e}:Noon\n")),
            }
        }
        content.push('\n');
    }

    content
}
