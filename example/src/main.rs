//! Walks one faked result set through the marshalling engine and prints
//! the decoded rows as JSON. Run with `RUST_LOG=trace` for the engine's
//! trace output.
use pgtext::{decode_field, encode_parameter, ByteStr, Result, TypeOverrideMap, Value};

// (column, oid) pairs as a RowDescription would report them
const COLUMNS: &[(&str, u32)] = &[
    ("id", 23),
    ("name", 25),
    ("balance", 1700),
    ("scores", 1007),
    ("home", 600),
];

const ROWS: &[&[&str]] = &[
    &["1", "ada", "1234567890123456789012345.5", "{10,NULL,30}", "(1.5,-2.25)"],
    &["2", "grace", "0.25", "{}", "(0,0)"],
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let names = COLUMNS.iter().map(|(name, _)| *name).collect::<Vec<_>>();
    // one map per result set, discarded when the pass is done
    let map = TypeOverrideMap::parse("balance:String,scores:Array,home:Point", &names)?;

    for row in ROWS {
        let mut decoded = Vec::new();
        for (i, (field, (_, oid))) in row.iter().zip(COLUMNS).enumerate() {
            let raw = ByteStr::copy_from_str(field);
            decoded.push(decode_field(&raw, map.hint(i, *oid))?);
        }
        println!("{}", serde_json::to_string(&decoded).expect("serialize decoded row"));
    }

    // and back out: values bound as statement parameters
    let tags = Value::Sequence(vec![Value::text("alpha"), Value::text("two words")]);
    println!("bind $1 = {}", encode_parameter(&tags)?);

    Ok(())
}
