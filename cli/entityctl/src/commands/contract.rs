//! Contract command.

use anyhow::Result;
use clap::Args;
use mirror_entity_id::{contract_id_parts, ContractIdParts, ContractTarget};
use tabled::Tabled;

use super::CommandContext;
use crate::output::{or_dash, print_output};

/// Split contract ID filter values into shard, realm, and num or create2
/// address.
#[derive(Debug, Args)]
pub struct ContractCommand {
    /// Values such as `1001`, `0.0.1001`, or `0.0.<create2 address>`.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Tabled)]
struct ContractRow {
    #[tabled(rename = "INPUT")]
    input: String,
    #[tabled(rename = "SHARD")]
    shard: String,
    #[tabled(rename = "REALM")]
    realm: String,
    #[tabled(rename = "NUM")]
    num: String,
    #[tabled(rename = "CREATE2 ADDRESS")]
    create2_evm_address: String,
}

impl ContractRow {
    fn new(input: &str, parts: &ContractIdParts) -> Self {
        let (num, create2_evm_address) = match parts.target {
            ContractTarget::Num(num) => (Some(num.to_string()), None),
            ContractTarget::Create2EvmAddress(bytes) => {
                (None, Some(format!("0x{}", hex::encode(bytes))))
            }
        };
        Self {
            input: input.to_string(),
            shard: or_dash(parts.shard.map(|s| s.to_string())),
            realm: or_dash(parts.realm.map(|r| r.to_string())),
            num: or_dash(num),
            create2_evm_address: or_dash(create2_evm_address),
        }
    }
}

impl ContractCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let parts = self
            .values
            .iter()
            .map(|value| contract_id_parts(value))
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<ContractRow> = self
            .values
            .iter()
            .zip(&parts)
            .map(|(value, parts)| ContractRow::new(value, parts))
            .collect();

        print_output(&parts, rows, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_for_num() {
        let parts = contract_id_parts("0.0.1001").unwrap();
        let row = ContractRow::new("0.0.1001", &parts);
        assert_eq!(row.shard, "0");
        assert_eq!(row.num, "1001");
        assert_eq!(row.create2_evm_address, "-");
    }

    #[test]
    fn test_row_for_create2() {
        let address = "0x71eaa748d5252be68c1185588beca495459fdba4";
        let parts = contract_id_parts(address).unwrap();
        let row = ContractRow::new(address, &parts);
        assert_eq!(row.shard, "-");
        assert_eq!(row.num, "-");
        assert_eq!(row.create2_evm_address, address);
    }
}
