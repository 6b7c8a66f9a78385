use clap::{App, Arg, ArgMatches};


pub trait Command {
    fn get_description(&self) -> &'static str;
    fn args(&self) -> Vec<Arg<'static>>;
    fn exec(&self, args: &ArgMatches) -> anyhow::Result<()>;
}

pub struct ClapCommand {
    pub identifier: String,
    pub exec: Box<dyn Command>,
}

impl ClapCommand {
    pub fn new(identifier: &str, exec: Box<dyn Command>) -> Self {
        ClapCommand { identifier: identifier.to_string(), exec }
    }

    pub fn register(&self) -> App<'static> {
        App::new(&self.identifier)
            .about(self.exec.get_description())
            .args(self.exec.args())
    }

    pub fn run(&self, args: &ArgMatches) -> anyhow::Result<()> {
        self.exec.exec(args)
    }
}
