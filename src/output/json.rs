//! JSON output of calculation results.

use crate::models::{HostRange, Network, NetworkView, PrefixLength};
use crate::processing::Calculation;
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Serializable snapshot of a [`NetworkView`].
#[derive(Serialize, Debug)]
pub struct NetworkReport {
    pub cidr: Network,
    pub prefix: PrefixLength,
    pub network_address: Ipv4Addr,
    pub network_address_bin: String,
    pub broadcast_address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub netmask_bin: String,
    pub host_range: HostRange,
    pub total_hosts: u64,
    pub usable_hosts: u64,
}

impl From<&NetworkView> for NetworkReport {
    fn from(view: &NetworkView) -> Self {
        NetworkReport {
            cidr: view.network(),
            prefix: view.prefix(),
            network_address: view.network_address(),
            network_address_bin: view.network_address_bin(),
            broadcast_address: view.broadcast_address(),
            netmask: view.netmask(),
            netmask_bin: view.netmask_bin(),
            host_range: view.host_range(),
            total_hosts: view.total_hosts(),
            usable_hosts: view.usable_hosts(),
        }
    }
}

/// One subnetting table entry.
#[derive(Serialize, Debug)]
pub struct SubnetReport {
    pub subnet: Network,
    pub host_range: HostRange,
    pub broadcast_address: Ipv4Addr,
}

#[derive(Serialize, Debug)]
pub struct CalculationReport {
    pub network: NetworkReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetReport>>,
}

impl From<&Calculation> for CalculationReport {
    fn from(calc: &Calculation) -> Self {
        let subnets = calc.subnets.clone().map(|iter| {
            iter.map(|subnet| {
                let view = subnet.view();
                SubnetReport {
                    subnet,
                    host_range: view.host_range(),
                    broadcast_address: view.broadcast_address(),
                }
            })
            .collect()
        });
        CalculationReport {
            network: NetworkReport::from(&calc.view),
            subnets,
        }
    }
}

pub fn render_json(calc: &Calculation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CalculationReport::from(calc))
}

/// Print the calculation as pretty JSON to stdout.
pub fn print_json(calc: &Calculation) -> Result<(), Box<dyn Error>> {
    println!("{}", render_json(calc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::calculate;
    use serde_json::Value;

    #[test]
    fn test_render_json_network() {
        let calc = calculate("172.16.5.9/32", "", &Config::default()).unwrap();
        let json: Value = serde_json::from_str(&render_json(&calc).unwrap()).unwrap();
        assert_eq!(json["network"]["cidr"], "172.16.5.9/32");
        assert_eq!(json["network"]["prefix"], 32);
        assert_eq!(json["network"]["network_address"], "172.16.5.9");
        assert_eq!(json["network"]["host_range"]["first"], "172.16.5.9");
        assert_eq!(json["network"]["usable_hosts"], 1);
        assert!(json.get("subnets").is_none());
    }

    #[test]
    fn test_render_json_subnets() {
        let calc = calculate("192.168.1.0/24", "26", &Config::default()).unwrap();
        let json: Value = serde_json::from_str(&render_json(&calc).unwrap()).unwrap();
        let subnets = json["subnets"].as_array().unwrap();
        assert_eq!(subnets.len(), 4);
        assert_eq!(subnets[1]["subnet"], "192.168.1.64/26");
        assert_eq!(subnets[1]["host_range"]["last"], "192.168.1.126");
        assert_eq!(subnets[3]["broadcast_address"], "192.168.1.255");
    }
}
