use azure_vm_verify::{
    default_credential, get_virtual_machine_image, get_virtual_machine_nics,
    list_virtual_machine_names, subscription_from_env, ComputeClient,
};
use colored::Colorize;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let mut args = std::env::args().skip(1);
    let resource_group = args
        .next()
        .ok_or("usage: azure-vm-verify <resource-group> [vm-name]")?;
    let vm_arg = args.next();

    let subscription_id = subscription_from_env()?;
    let credential = default_credential()?;
    let client = ComputeClient::new(credential, &subscription_id);

    let vm_names = list_virtual_machine_names(&client, &resource_group).await?;
    if vm_names.is_empty() {
        println!("No virtual machines in resource group {resource_group}");
        return Ok(());
    }
    println!(
        "Virtual machines in {rg}: {names:?}",
        rg = resource_group.green(),
        names = vm_names
    );

    let vm_name = vm_arg.unwrap_or_else(|| vm_names[0].clone());
    let nics = get_virtual_machine_nics(&client, &resource_group, &vm_name).await?;
    let image = get_virtual_machine_image(&client, &resource_group, &vm_name).await?;

    println!(
        "{vm}: nics={nics:?} image={publisher}/{offer}/{sku}/{version}",
        vm = vm_name.green(),
        publisher = image.publisher,
        offer = image.offer,
        sku = image.sku,
        version = image.version
    );

    Ok(())
}
