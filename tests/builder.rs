#[cfg(test)]
mod builder {
    use pbrt_writer::{
        blackbody, params, rgb, sampled, texture, xyz, Builder, Error, TextureType,
        TransformTime,
    };

    fn check(builder: &Builder<Vec<u8>>, expected: &[&str]) {
        assert_eq!(builder.to_string(), expected.join(" ") + "\n");
    }

    fn check_lines(builder: &Builder<Vec<u8>>, expected: &str) {
        assert_eq!(builder.to_string(), expected.to_owned() + "\n");
    }

    #[test]
    fn general_structure() {
        let mut b = Builder::new();
        b.world_begin(|b| {
            b.translate(1.0, 2.0, 3.0)?;
            Ok(())
        })
        .unwrap();

        check_lines(&b, "WorldBegin\nTranslate 1 2 3\nWorldEnd");
    }

    #[test]
    fn comments() {
        let mut b = Builder::new();
        b.comment("foo bar").unwrap();
        check(&b, &["# foo bar"]);

        let mut b = Builder::new();
        b.comment("foo\nbar").unwrap();
        check_lines(&b, "# foo\n# bar");
    }

    #[test]
    fn include() {
        let mut b = Builder::new();
        b.include("foo/bar.pbrt").unwrap();
        check(&b, &[r#"Include "foo/bar.pbrt""#]);
    }

    #[test]
    fn spectrums() {
        let mut b = Builder::new();
        b.light_source()
            .infinite(params! { L: rgb(0.1, 0.2, 0.3) })
            .unwrap();
        check(&b, &[r#"LightSource "infinite" "rgb L" [0.1 0.2 0.3]"#]);

        let mut b = Builder::new();
        b.light_source()
            .infinite(params! { L: xyz(0.1, 0.2, 0.3) })
            .unwrap();
        check(&b, &[r#"LightSource "infinite" "xyz L" [0.1 0.2 0.3]"#]);

        let mut b = Builder::new();
        b.light_source()
            .infinite(params! { L: sampled([300.0, 0.3]) })
            .unwrap();
        check(&b, &[r#"LightSource "infinite" "spectrum L" [300 0.3]"#]);

        let mut b = Builder::new();
        b.light_source()
            .infinite(params! { L: sampled("filename") })
            .unwrap();
        check(&b, &[r#"LightSource "infinite" "spectrum L" ["filename"]"#]);

        let mut b = Builder::new();
        b.light_source()
            .infinite(params! { L: blackbody(6500.0, 1.0) })
            .unwrap();
        check(&b, &[r#"LightSource "infinite" "blackbody L" [6500 1]"#]);
    }

    #[test]
    fn transformations() {
        let mut b = Builder::new();
        b.identity().unwrap();
        check(&b, &["Identity"]);

        let mut b = Builder::new();
        b.translate(1.0, 2.0, 3.0).unwrap();
        check(&b, &["Translate 1 2 3"]);

        let mut b = Builder::new();
        b.scale(1.0, 2.0, 3.0).unwrap();
        check(&b, &["Scale 1 2 3"]);

        let mut b = Builder::new();
        b.rotate(1.0, 2.0, 3.0, 4.0).unwrap();
        check(&b, &["Rotate 1 2 3 4"]);

        let mut b = Builder::new();
        b.look_at([1.0; 9]).unwrap();
        check(&b, &["LookAt 1 1 1 1 1 1 1 1 1"]);

        let mut b = Builder::new();
        b.coordinate_system("view").unwrap();
        check(&b, &[r#"CoordinateSystem "view""#]);

        let mut b = Builder::new();
        b.coord_sys_transform("view").unwrap();
        check(&b, &[r#"CoordSysTransform "view""#]);

        let mut b = Builder::new();
        b.transform([1.0; 16]).unwrap();
        check(&b, &["Transform 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1"]);

        let mut b = Builder::new();
        b.concat_transform([1.0; 16]).unwrap();
        check(&b, &["ConcatTransform 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1"]);

        let mut b = Builder::new();
        b.transform_times(1.0, 2.0).unwrap();
        check(&b, &["TransformTimes 1 2"]);

        let mut b = Builder::new();
        b.active_transform(TransformTime::StartTime).unwrap();
        check(&b, &["ActiveTransform StartTime"]);
    }

    #[test]
    fn wrong_arity_writes_nothing() {
        let mut b = Builder::new();
        let err = b
            .translate(1.0, 2.0, 3.0)
            .unwrap()
            .look_at([1.0; 8])
            .err()
            .unwrap();

        assert_eq!(
            err.to_string(),
            "wrong number of arguments to LookAt (given 8, expected 9)"
        );
        check(&b, &["Translate 1 2 3"]);
    }

    #[test]
    fn cameras() {
        let mut b = Builder::new();
        b.camera()
            .perspective(params! {
                shutteropen: 1,
                shutterclose: 2,
                fov: 45,
            })
            .unwrap();

        check(
            &b,
            &[
                r#"Camera "perspective""#,
                r#""float shutteropen" [1]"#,
                r#""float shutterclose" [2]"#,
                r#""float fov" [45]"#,
            ],
        );

        let mut b = Builder::new();
        b.camera()
            .realistic(params! {
                lensfile: "lens.dat",
                simpleweighting: true,
            })
            .unwrap();

        check(
            &b,
            &[
                r#"Camera "realistic""#,
                r#""string lensfile" ["lens.dat"]"#,
                r#""bool simpleweighting" ["true"]"#,
            ],
        );
    }

    #[test]
    fn samplers() {
        let mut b = Builder::new();
        b.sampler().o2sequence(params! { pixelsamples: 1 }).unwrap();
        check(&b, &[r#"Sampler "02sequence" "integer pixelsamples" [1]"#]);

        let mut b = Builder::new();
        b.sampler()
            .stratified(params! { jitter: true, xsamples: 1, ysamples: 2 })
            .unwrap();
        check(
            &b,
            &[
                r#"Sampler "stratified""#,
                r#""bool jitter" ["true"]"#,
                r#""integer xsamples" [1]"#,
                r#""integer ysamples" [2]"#,
            ],
        );
    }

    #[test]
    fn film() {
        let mut b = Builder::new();
        b.film()
            .image(params! {
                xresolution: 1,
                yresolution: 2,
                cropwindow: [3, 4, 5, 6],
                filename: "out.exr",
            })
            .unwrap();

        check(
            &b,
            &[
                r#"Film "image""#,
                r#""integer xresolution" [1]"#,
                r#""integer yresolution" [2]"#,
                r#""float cropwindow" [3 4 5 6]"#,
                r#""string filename" ["out.exr"]"#,
            ],
        );
    }

    #[test]
    fn pixel_filters() {
        let mut b = Builder::new();
        b.pixel_filter()
            .mitchell(params! { xwidth: 1, ywidth: 2, B: 3, C: 4 })
            .unwrap();

        check(
            &b,
            &[
                r#"PixelFilter "mitchell""#,
                r#""float xwidth" [1]"#,
                r#""float ywidth" [2]"#,
                r#""float B" [3]"#,
                r#""float C" [4]"#,
            ],
        );
    }

    #[test]
    fn integrators() {
        let mut b = Builder::new();
        b.integrator()
            .bdpt(params! {
                maxdepth: 1,
                lightsamplestrategy: "power",
                visualizestrategies: false,
            })
            .unwrap();

        check(
            &b,
            &[
                r#"Integrator "bdpt""#,
                r#""integer maxdepth" [1]"#,
                r#""string lightsamplestrategy" ["power"]"#,
                r#""bool visualizestrategies" ["false"]"#,
            ],
        );
    }

    #[test]
    fn accelerators() {
        let mut b = Builder::new();
        b.accelerator()
            .bvh(params! { maxnodeprims: 1, splitmethod: "sah" })
            .unwrap();

        check(
            &b,
            &[
                r#"Accelerator "bvh""#,
                r#""integer maxnodeprims" [1]"#,
                r#""string splitmethod" ["sah"]"#,
            ],
        );
    }

    #[test]
    fn attributes() {
        let mut b = Builder::new();
        b.attribute_begin(|b| {
            b.translate(1.0, 2.0, 3.0)?;
            Ok(())
        })
        .unwrap();
        check_lines(&b, "AttributeBegin\nTranslate 1 2 3\nAttributeEnd");

        let mut b = Builder::new();
        b.transform_begin(|b| {
            b.translate(1.0, 2.0, 3.0)?;
            Ok(())
        })
        .unwrap();
        check_lines(&b, "TransformBegin\nTranslate 1 2 3\nTransformEnd");

        let mut b = Builder::new();
        b.reverse_orientation().unwrap();
        check(&b, &["ReverseOrientation"]);
    }

    #[test]
    fn shapes() {
        let mut b = Builder::new();
        b.shape()
            .sphere(params! { radius: 1, zmin: 2, zmax: 3, phimax: 4 })
            .unwrap();
        check(
            &b,
            &[
                r#"Shape "sphere""#,
                r#""float radius" [1]"#,
                r#""float zmin" [2]"#,
                r#""float zmax" [3]"#,
                r#""float phimax" [4]"#,
            ],
        );

        let mut b = Builder::new();
        b.shape()
            .curve(params! {
                P: [1.0; 12],
                basis: "bspline",
                degree: 2,
                type: "cylinder",
            })
            .unwrap();
        check(
            &b,
            &[
                r#"Shape "curve""#,
                r#""point3 P" [1 1 1 1 1 1 1 1 1 1 1 1]"#,
                r#""string basis" ["bspline"]"#,
                r#""integer degree" [2]"#,
                r#""string type" ["cylinder"]"#,
            ],
        );

        // alpha is a float_texture: numbers stay floats, strings become
        // texture references.
        let mut b = Builder::new();
        b.shape()
            .trianglemesh(params! {
                indices: [1, 2, 3],
                P: [4, 5, 6],
                alpha: 15,
                shadowalpha: "fade",
            })
            .unwrap();
        check(
            &b,
            &[
                r#"Shape "trianglemesh""#,
                r#""integer indices" [1 2 3]"#,
                r#""point3 P" [4 5 6]"#,
                r#""float alpha" [15]"#,
                r#""texture shadowalpha" ["fade"]"#,
            ],
        );

        let mut b = Builder::new();
        b.shape()
            .plymesh(params! { filename: "mesh.ply", alpha: "cutout" })
            .unwrap();
        check(
            &b,
            &[
                r#"Shape "plymesh""#,
                r#""string filename" ["mesh.ply"]"#,
                r#""texture alpha" ["cutout"]"#,
            ],
        );
    }

    #[test]
    fn shapes_accept_material_overrides() {
        let mut b = Builder::new();
        b.shape()
            .sphere(params! { radius: 1, Kd: rgb(0.5, 0.5, 0.5), sheen: 1 })
            .unwrap();

        check(
            &b,
            &[
                r#"Shape "sphere""#,
                r#""float radius" [1]"#,
                r#""rgb Kd" [0.5 0.5 0.5]"#,
                r#""float sheen" [1]"#,
            ],
        );
    }

    #[test]
    fn object_instancing() {
        let mut b = Builder::new();
        b.object_begin("tree", |b| {
            b.translate(1.0, 2.0, 3.0)?;
            Ok(())
        })
        .unwrap();
        check_lines(&b, "ObjectBegin \"tree\"\nTranslate 1 2 3\nObjectEnd");

        let mut b = Builder::new();
        b.object_instance("tree").unwrap();
        check(&b, &[r#"ObjectInstance "tree""#]);
    }

    #[test]
    fn lights() {
        let mut b = Builder::new();
        b.light_source()
            .distant(params! {
                scale: rgb(1.0, 1.0, 1.0),
                L: xyz(2.0, 2.0, 2.0),
                from: [3, 3, 3],
                to: [4, 4, 4],
            })
            .unwrap();
        check(
            &b,
            &[
                r#"LightSource "distant""#,
                r#""rgb scale" [1 1 1]"#,
                r#""xyz L" [2 2 2]"#,
                r#""point3 from" [3 3 3]"#,
                r#""point3 to" [4 4 4]"#,
            ],
        );

        let mut b = Builder::new();
        b.light_source()
            .spot(params! {
                I: xyz(2.0, 2.0, 2.0),
                coneangle: 5,
                conedeltaangle: 6,
            })
            .unwrap();
        check(
            &b,
            &[
                r#"LightSource "spot""#,
                r#""xyz I" [2 2 2]"#,
                r#""float coneangle" [5]"#,
                r#""float conedeltaangle" [6]"#,
            ],
        );
    }

    #[test]
    fn area_lights() {
        let mut b = Builder::new();
        b.area_light_source()
            .diffuse(params! {
                L: rgb(1.0, 1.0, 1.0),
                twosided: true,
                samples: 2,
            })
            .unwrap();

        check(
            &b,
            &[
                r#"AreaLightSource "diffuse""#,
                r#""rgb L" [1 1 1]"#,
                r#""bool twosided" ["true"]"#,
                r#""integer samples" [2]"#,
            ],
        );
    }

    #[test]
    fn materials() {
        let mut b = Builder::new();
        b.material()
            .matte(params! {
                bumpmap: "bumps",
                Kd: rgb(1.0, 1.0, 1.0),
                sigma: "roughtex",
            })
            .unwrap();
        check(
            &b,
            &[
                r#"Material "matte""#,
                r#""texture bumpmap" ["bumps"]"#,
                r#""rgb Kd" [1 1 1]"#,
                r#""texture sigma" ["roughtex"]"#,
            ],
        );

        let mut b = Builder::new();
        b.material()
            .metal(params! {
                eta: rgb(1.0, 1.0, 1.0),
                k: blackbody(5000.0, 1.0),
                roughness: 2,
                remaproughness: true,
            })
            .unwrap();
        check(
            &b,
            &[
                r#"Material "metal""#,
                r#""rgb eta" [1 1 1]"#,
                r#""blackbody k" [5000 1]"#,
                r#""float roughness" [2]"#,
                r#""bool remaproughness" ["true"]"#,
            ],
        );

        let mut b = Builder::new();
        b.material()
            .uber(params! {
                Kd: rgb(1.0, 1.0, 1.0),
                Kr: texture("env"),
                Kt: blackbody(3000.0, 1.0),
                vroughness: "rough",
                eta: 6,
                opacity: sampled([7.0, 7.0]),
            })
            .unwrap();
        check(
            &b,
            &[
                r#"Material "uber""#,
                r#""rgb Kd" [1 1 1]"#,
                r#""texture Kr" ["env"]"#,
                r#""blackbody Kt" [3000 1]"#,
                r#""texture vroughness" ["rough"]"#,
                r#""float eta" [6]"#,
                r#""spectrum opacity" [7 7]"#,
            ],
        );

        let mut b = Builder::new();
        b.material().none(params! {}).unwrap();
        check(&b, &[r#"Material "none""#]);
    }

    #[test]
    fn named_materials() {
        let mut b = Builder::new();
        b.named_material("gold").unwrap();
        check(&b, &[r#"NamedMaterial "gold""#]);

        let mut b = Builder::new();
        b.make_named_material("myplastic")
            .plastic(params! {
                bumpmap: "bumps",
                Kd: rgb(1.0, 1.0, 1.0),
                Ks: sampled([2.0, 2.0]),
                roughness: 3,
                remaproughness: true,
            })
            .unwrap();
        check(
            &b,
            &[
                r#"MakeNamedMaterial "myplastic" "string type" "plastic""#,
                r#""texture bumpmap" ["bumps"]"#,
                r#""rgb Kd" [1 1 1]"#,
                r#""spectrum Ks" [2 2]"#,
                r#""float roughness" [3]"#,
                r#""bool remaproughness" ["true"]"#,
            ],
        );
    }

    #[test]
    fn named_materials_dispatch_on_kind_strings() {
        let mut b = Builder::new();
        b.make_named_material("myplastic")
            .kind("plastic", params! { roughness: 3 })
            .unwrap();
        check(
            &b,
            &[
                r#"MakeNamedMaterial "myplastic" "string type" "plastic""#,
                r#""float roughness" [3]"#,
            ],
        );

        let mut b = Builder::new();
        let err = b
            .make_named_material("myplastic")
            .kind("copper", params! {})
            .err()
            .unwrap();
        assert!(matches!(err, Error::UnknownMaterial(_)));
        assert_eq!(err.to_string(), "unknown material: copper");

        let mut b = Builder::new();
        let err = b
            .make_named_material("myplastic")
            .kind("plastic", params! { unknown: "foo" })
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "unknown keyword: unknown");
    }

    #[test]
    fn named_media() {
        let mut b = Builder::new();
        b.make_named_medium("fog")
            .homogeneous(params! {
                sigma_a: rgb(0.1, 0.1, 0.1),
                g: 0.2,
                scale: 2,
            })
            .unwrap();

        check(
            &b,
            &[
                r#"MakeNamedMedium "fog" "string type" "homogeneous""#,
                r#""rgb sigma_a" [0.1 0.1 0.1]"#,
                r#""float g" [0.2]"#,
                r#""float scale" [2]"#,
            ],
        );
    }

    #[test]
    fn textures() {
        let mut b = Builder::new();
        b.texture("checks", TextureType::Spectrum)
            .checkerboard(params! {
                dimension: 2,
                tex1: texture("gold"),
                tex2: 0.2,
            })
            .unwrap();
        check(
            &b,
            &[
                r#"Texture "checks" "spectrum" "checkerboard""#,
                r#""integer dimension" [2]"#,
                r#""texture tex1" ["gold"]"#,
                r#""float tex2" [0.2]"#,
            ],
        );

        let mut b = Builder::new();
        b.texture("bumps", TextureType::Float)
            .imagemap(params! { filename: "bumps.png", trilinear: true })
            .unwrap();
        check(
            &b,
            &[
                r#"Texture "bumps" "float" "imagemap""#,
                r#""string filename" ["bumps.png"]"#,
                r#""bool trilinear" ["true"]"#,
            ],
        );

        let mut b = Builder::new();
        b.texture("tint", TextureType::Color)
            .constant(params! { value: texture("base") })
            .unwrap();
        check(
            &b,
            &[
                r#"Texture "tint" "color" "constant""#,
                r#""texture value" ["base"]"#,
            ],
        );
    }

    #[test]
    fn builds_by_explicit_calls() {
        let mut b = Builder::new();
        b.translate(1.0, 2.0, 3.0).unwrap();
        b.shape().sphere(params! { radius: 1 }).unwrap();

        check_lines(&b, "Translate 1 2 3\nShape \"sphere\" \"float radius\" [1]");
    }

    #[test]
    fn builds_by_chaining() {
        let mut b = Builder::new();
        b.translate(1.0, 2.0, 3.0)
            .unwrap()
            .shape()
            .sphere(params! { radius: 1 })
            .unwrap();

        check_lines(&b, "Translate 1 2 3\nShape \"sphere\" \"float radius\" [1]");
    }

    #[test]
    fn writes_to_a_provided_sink() {
        let mut b = Builder::with_sink(Vec::new());
        b.translate(1.0, 2.0, 3.0).unwrap();

        assert_eq!(b.into_sink(), b"Translate 1 2 3\n".to_vec());
    }
}
