#[cfg(test)]
mod statements {
    use pbrt_writer::core::parameter::{Parameter, ParameterList};
    use pbrt_writer::core::signature::Signature;
    use pbrt_writer::core::statement::Statement;
    use pbrt_writer::core::values::Values;
    use pbrt_writer::{params, Error, Value};

    #[test]
    fn values_flatten_depth_first() {
        let nested = Value::from(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(Values::from(nested).to_string(), "1 2 3 4 5 6");
    }

    #[test]
    fn values_flatten_is_idempotent_on_flat_input() {
        let flat = Value::from(vec![1.0, 2.0, 3.0]);
        let values = Values::from(flat);

        assert_eq!(values.len(), 3);
        assert_eq!(values.to_string(), "1 2 3");
    }

    #[test]
    fn values_quote_strings() {
        let values = Values::from(Value::from(vec!["foo", "bar"]));
        assert_eq!(values.to_string(), "\"foo\" \"bar\"");
    }

    #[test]
    fn values_quote_booleans() {
        let values = Values::from(Value::from(vec![true, false]));
        assert_eq!(values.to_string(), "\"true\" \"false\"");
    }

    #[test]
    fn parameter_label_is_quoted_type_and_name() {
        let parameter = Parameter::new("vector2", "foo");
        assert_eq!(parameter.to_string(), "\"vector2 foo\"");
    }

    #[test]
    fn parameter_list_brackets_each_group() {
        let signature = Signature::new(
            false,
            &[("filename", "string"), ("xresolution", "integer")],
        )
        .unwrap();
        let list = ParameterList::from(
            params! { filename: "simple.png", xresolution: 800 },
            signature,
        )
        .unwrap();

        assert_eq!(
            list.to_string(),
            r#""string filename" ["simple.png"] "integer xresolution" [800]"#
        );
    }

    #[test]
    fn parameter_list_preserves_insertion_order() {
        let signature = Signature::new(
            false,
            &[("a", "float"), ("b", "float"), ("c", "float")],
        )
        .unwrap();
        let list =
            ParameterList::from(params! { b: 1.0, a: 2.0, c: 3.0 }, signature).unwrap();

        assert_eq!(
            list.to_string(),
            r#""float b" [1] "float a" [2] "float c" [3]"#
        );
    }

    #[test]
    fn parameter_list_round_trips_resolved_triples() {
        let signature = Signature::new(
            false,
            &[("filename", "string"), ("xresolution", "integer")],
        )
        .unwrap();
        let list = ParameterList::from(
            params! { filename: "simple.png", xresolution: 800 },
            signature,
        )
        .unwrap();

        let entries = list.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.type_tag(), "string");
        assert_eq!(entries[0].0.name(), "filename");
        assert_eq!(entries[0].1.to_string(), "\"simple.png\"");
        assert_eq!(entries[1].0.type_tag(), "integer");
        assert_eq!(entries[1].0.name(), "xresolution");
        assert_eq!(entries[1].1.to_string(), "800");
    }

    #[test]
    fn fixed_size_renders_directive_and_values() {
        let statement =
            Statement::fixed_size("Translate", 3, Value::from([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(statement.to_string(), "Translate 1 2 3");
    }

    #[test]
    fn fixed_size_with_no_values_renders_bare_directive() {
        let statement = Statement::fixed_size("WorldBegin", 0, Values::new()).unwrap();
        assert_eq!(statement.to_string(), "WorldBegin");
    }

    #[test]
    fn fixed_size_counts_values_after_flattening() {
        let statement =
            Statement::fixed_size("Translate", 3, Value::from(vec![vec![1.0, 2.0, 3.0]]));
        assert!(statement.is_ok());
    }

    #[test]
    fn fixed_size_rejects_wrong_arity() {
        let err = Statement::fixed_size("Translate", 3, Value::from([1.0, 2.0])).unwrap_err();

        assert!(matches!(err, Error::WrongArgumentCount { .. }));
        assert_eq!(
            err.to_string(),
            "wrong number of arguments to Translate (given 2, expected 3)"
        );
    }

    #[test]
    fn variadic_renders_directive_kind_and_parameters() {
        let signature = Signature::new(
            false,
            &[("filename", "string"), ("xresolution", "integer")],
        )
        .unwrap();
        let list = ParameterList::from(
            params! { filename: "simple.png", xresolution: 800 },
            signature,
        )
        .unwrap();
        let statement = Statement::variadic("Film", "image", list);

        assert_eq!(
            statement.to_string(),
            r#"Film "image" "string filename" ["simple.png"] "integer xresolution" [800]"#
        );
    }

    #[test]
    fn variadic_with_no_parameters_omits_the_list() {
        let signature = Signature::new(false, &[("pixelsamples", "integer")]).unwrap();
        let list = ParameterList::from(params! {}, signature).unwrap();
        let statement = Statement::variadic("Sampler", "halton", list);

        assert_eq!(statement.to_string(), r#"Sampler "halton""#);
    }
}
