/*
[INPUT]:  Base URL from TASKPAD_BASE_URL (defaults to http://localhost:8000)
[OUTPUT]: Rendered task list before and after one create
[POS]:    Examples - list/create round through the public API
[UPDATE]: When the client surface changes
*/

use taskpad_client::*;

/// Example: list tasks, create one, list again
#[tokio::main]
async fn main() {
    println!("=== Taskpad Client Example ===\n");

    let base_url = std::env::var("TASKPAD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let config = ClientConfig::new(base_url);

    let client = match TaskClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", config.tasks_url());

    println!("Loading tasks...");
    match client.list_tasks(&config).await {
        Ok(list) => println!("{}\n", render_task_list(&list).to_text()),
        Err(e) => println!("{}\n", DisplayModel::error(e).to_text()),
    }

    let form = TaskForm {
        title: "Try taskpad".to_string(),
        description: "created by the example".to_string(),
        ..TaskForm::default()
    };
    let request = match form.to_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("✗ {}", e);
            return;
        }
    };

    println!("Creating task {:?}...", request.title);
    match client.create_task(&config, &request).await {
        Ok(id) => println!("✓ Created (id: {})\n", id.as_deref().unwrap_or("-")),
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    match client.list_tasks(&config).await {
        Ok(list) => println!("{}", render_task_list(&list).to_text()),
        Err(e) => println!("{}", DisplayModel::error(e).to_text()),
    }

    println!("\n✓ Example complete");
}
