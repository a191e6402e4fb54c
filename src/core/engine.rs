use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        println!("Parsing compose manifest...");
        let services = self.pipeline.extract().await?;
        println!("Found {} services", services.len());

        println!("Converting services...");
        let configs = self.pipeline.transform(services).await?;
        println!("Converted {} objects", configs.len());

        println!("Writing Kubernetes configs...");
        let paths = self.pipeline.load(configs).await?;
        for path in &paths {
            println!("file {:?} created", path);
        }

        Ok(paths)
    }
}
