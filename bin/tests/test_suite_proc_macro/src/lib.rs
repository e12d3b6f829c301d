use quote::{format_ident, quote};

/// Generates one test per `*.rpn` file below the given directory (relative to
/// `bin/tests`). Each case is checked against its sibling `*.expected` file.
#[proc_macro]
pub fn generate_tests(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let cases_dir = syn::parse_macro_input!(input as syn::LitStr).value();
    let root_dir = format!("{}/..", env!("CARGO_MANIFEST_DIR"));
    let tests = walkdir::WalkDir::new(format!("{root_dir}/{cases_dir}"))
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("rpn".as_ref()))
        .map(|entry| {
            let case_path = entry.path().to_string_lossy().to_string();
            let expected_path = entry.path().with_extension("expected").to_string_lossy().to_string();
            let relative_case_path = entry.path().strip_prefix(&root_dir).unwrap().to_string_lossy();
            let test_ident = format_ident!(
                "test_{}",
                relative_case_path.replace(['/', '-', '.'], "_").trim_end_matches("_rpn")
            );
            quote! {
                #[test]
                fn #test_ident() {
                    rpn_expect(
                        std::fs::read_to_string(#case_path).unwrap().as_str(),
                        std::fs::read_to_string(#expected_path).unwrap().as_str(),
                    );
                }
            }
        });

    quote! {
        #[ctor::ctor]
        fn init() {
            env_logger::init();
        }

        #(#tests)*
    }
    .into()
}
