use pnet::datalink::{self, NetworkInterface};

/// Source of the interface names to scan.
pub trait InterfaceProvider {
    fn interface_names(&self) -> Vec<String>;
}

/// Every interface the operating system reports, in OS order.
///
/// Nothing is filtered out: down, loopback and virtual interfaces are scanned
/// too and simply yield no addresses when the scanner fails on them.
pub struct SystemInterfaces;

impl InterfaceProvider for SystemInterfaces {
    fn interface_names(&self) -> Vec<String> {
        names(&datalink::interfaces())
    }
}

/// A fixed list of names, used when interfaces are chosen by hand.
pub struct FixedInterfaces(pub Vec<String>);

impl InterfaceProvider for FixedInterfaces {
    fn interface_names(&self) -> Vec<String> {
        self.0.clone()
    }
}

fn names(interfaces: &[NetworkInterface]) -> Vec<String> {
    interfaces.iter().map(|iface| iface.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::ipnetwork::IpNetwork;
    use pnet::util::MacAddr;

    const IFF_UP: u32 = 1;
    const IFF_BROADCAST: u32 = 1 << 1;
    const IFF_LOOPBACK: u32 = 1 << 3;

    fn create_mock_interface(name: &str, ips: Vec<IpNetwork>, flags: u32) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: "An interface".to_string(),
            index: 0,
            mac: Some(MacAddr(0x1, 0x2, 0x3, 0x4, 0x5, 0x6)),
            ips,
            flags,
        }
    }

    #[test]
    fn names_keep_os_order_and_loopback() {
        let interfaces: Vec<NetworkInterface> = vec![
            create_mock_interface("lo", vec![IpNetwork::V4("127.0.0.1".parse().unwrap())], IFF_UP | IFF_LOOPBACK),
            create_mock_interface("enp9s0", vec![IpNetwork::V4("192.168.0.32".parse().unwrap())], IFF_UP | IFF_BROADCAST),
            create_mock_interface("docker0", Vec::new(), IFF_BROADCAST),
        ];
        assert_eq!(names(&interfaces), vec!["lo", "enp9s0", "docker0"]);
    }

    #[test]
    fn fixed_interfaces_are_returned_verbatim() {
        let provider = FixedInterfaces(vec!["wlan0".into(), "wlan0".into()]);
        assert_eq!(provider.interface_names(), vec!["wlan0", "wlan0"]);
    }

    #[test]
    fn system_interfaces_match_pnet() {
        assert_eq!(SystemInterfaces.interface_names(), names(&datalink::interfaces()));
    }
}
