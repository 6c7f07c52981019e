use label_sheet::render::{render_layout, FileNaming, GeometryJsonRenderer};
use label_sheet::{layout, AdhesiveStyle, LabelSpec, Mm, SheetConfig, TextLine};

fn main() {
    let specs = vec![
        LabelSpec::new(Mm(80.0), Mm(25.0))
            .with_name("main switch")
            .with_quantity(4)
            .with_holes(2, Mm(3.5), Mm(5.0))
            .with_line(TextLine::new("MAIN SWITCH", Mm(8.0)))
            .with_line(TextLine::new("400V 3PH", Mm(4.0))),
        LabelSpec::new(Mm(40.0), Mm(12.0))
            .with_quantity(10)
            .with_colours("White", "Red")
            .with_line(TextLine::new("DANGER", Mm(6.0))),
        LabelSpec::new(Mm(100.0), Mm(30.0))
            .with_thickness(Mm(1.6))
            .with_style(AdhesiveStyle::NonAdhesive)
            .with_line(TextLine::new("EMERGENCY STOP", Mm(10.0))),
    ];

    let sheet = SheetConfig::new(Mm(300.0), Mm(200.0))
        .with_margin(Mm(5.0))
        .with_gap(Mm(2.0));
    let result = layout(&specs, &sheet).expect("sheet is valid");

    let mut renderer = GeometryJsonRenderer { pretty: true };
    let files = render_layout(&result, &mut renderer, &FileNaming::with_prefix("MLA "))
        .expect("can render sheets");

    std::fs::create_dir_all("out").expect("can create output directory");
    for file in files {
        let path = std::path::Path::new("out").join(&file.name);
        std::fs::write(&path, &file.contents).expect("can write sheet");
        println!("wrote {}", path.display());
    }
}
