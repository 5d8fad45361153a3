use dockdns_domain::{DomainError, SrvAnswer};
use hickory_proto::rr::rdata::SRV;
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

/// Build the wire record for one SRV answer. Owner and target become FQDNs.
pub fn to_srv_record(answer: &SrvAnswer) -> Result<Record, DomainError> {
    let owner = fqdn(&answer.name)?;
    let target = fqdn(&answer.target)?;
    let rdata = RData::SRV(SRV::new(answer.priority, answer.weight, answer.port, target));
    Ok(Record::from_rdata(owner, answer.ttl, rdata))
}

fn fqdn(name: &str) -> Result<Name, DomainError> {
    let mut parsed = Name::from_str(name)
        .map_err(|e| DomainError::InvalidRecordName(format!("{}: {}", name, e)))?;
    parsed.set_fqdn(true);
    Ok(parsed)
}
