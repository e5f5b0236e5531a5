//! Library integration tests.

use bref_layers::LayerError;

#[test]
fn error_types_are_public() {
    let err = LayerError::LayerNotFound {
        version: "2.0.5".into(),
        layer: "console".into(),
        region: "us-east-1".into(),
    };
    assert!(err.to_string().contains("console"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> bref_layers::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use bref_layers::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["bref-layers", "extra-layer", "yaml-php-82", "--json"]);
    assert!(cli.json);

    if let Commands::ExtraLayer(args) = cli.command {
        assert_eq!(args.name, "yaml-php-82");
    } else {
        panic!("Expected ExtraLayer command");
    }
}
