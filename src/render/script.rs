use crate::catalog::Operation;
use crate::layout::{DATA_DIR, PNGS_DIR};

pub const DATA_FILE_PLACEHOLDER: &str = "DATA_FILE_NAME_PLACEHOLDER";
pub const OUTPUT_FILE_PLACEHOLDER: &str = "OUTPUT_FILE_NAME_PLACEHOLDER";
pub const PLOT_TITLE_PLACEHOLDER: &str = "PLOT_TITLE";

/// Fill the template for one operation.
///
/// Paths are relative to the gnuplots folder, where the plotter runs. Every
/// occurrence of each placeholder is replaced, data file first, then output
/// image, then title.
pub fn render_script(template: &str, operation: Operation) -> String {
    let data_path = format!("../{}/{}", DATA_DIR, operation.data_file_name());
    let image_path = format!("../{}/{}", PNGS_DIR, operation.image_file_name());

    template
        .replace(DATA_FILE_PLACEHOLDER, &data_path)
        .replace(OUTPUT_FILE_PLACEHOLDER, &image_path)
        .replace(PLOT_TITLE_PLACEHOLDER, operation.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "\
set terminal png
set output \"OUTPUT_FILE_NAME_PLACEHOLDER\"
set title \"PLOT_TITLE\"
plot \"DATA_FILE_NAME_PLACEHOLDER\" index 0 with lines
";

    #[test]
    fn substitutes_all_placeholders() {
        let script = render_script(TEMPLATE, Operation::AddRandom);
        let expected = "\
set terminal png
set output \"../pngs/AddRandom.png\"
set title \"Add at random spot\"
plot \"../data/AddRandom.dat\" index 0 with lines
";
        assert_eq!(script, expected);
        for token in [DATA_FILE_PLACEHOLDER, OUTPUT_FILE_PLACEHOLDER, PLOT_TITLE_PLACEHOLDER] {
            assert!(!script.contains(token));
        }
    }

    #[test]
    fn replaces_repeated_occurrences() {
        let script = render_script("PLOT_TITLE|PLOT_TITLE", Operation::Iterate);
        assert_eq!(script, "Iterate|Iterate");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(render_script("plot sin(x)\n", Operation::GetRandom), "plot sin(x)\n");
    }
}
