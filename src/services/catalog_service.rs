use crate::models::RequestOption;

/// WorkSpace bundles offered on the manage page.
pub fn request_catalog() -> Vec<RequestOption> {
    [(1, 2, "4GiB"), (2, 4, "8GiB"), (3, 8, "16GiB")]
        .into_iter()
        .map(|(n, cpu, ram)| RequestOption {
            id: format!("workspace-{}", n),
            cpu,
            ram: ram.to_string(),
            os: "Windows".to_string(),
            description: format!("{} CPU, {} RAM, Windows instance", cpu, ram),
        })
        .collect()
}
