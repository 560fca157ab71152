use zkgas::{CostTableVariant, Protocol};

use super::emit;

pub fn render_list() -> String {
    let mut out = String::from("Protocols:\n");
    for protocol in Protocol::ALL {
        out.push_str(&format!("  {:<16} {}\n", protocol.slug(), protocol.title()));
    }
    out.push_str("\nCost tables:\n");
    for variant in CostTableVariant::ALL {
        let model = variant.model();
        out.push_str(&format!(
            "  {:<16} {:<10} ECC ADD {:>6}  ECC MUL {:>6}\n",
            format!("{:?}", variant).to_lowercase(),
            model.label(),
            model.ecc_add(),
            model.ecc_mul()
        ));
    }
    out
}

pub fn cmd_list() {
    emit(&render_list(), None);
}
